use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }
}

/// Why and when a snake was eliminated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Death {
    pub cause: String,
    pub turn: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snake {
    pub id: String,
    pub name: String,
    pub url: String,
    pub body: Vec<Point>,
    pub health: i64,
    pub death: Option<Death>,
    pub color: String,
}

impl Snake {
    pub fn is_alive(&self) -> bool {
        self.death.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_alive_follows_death() {
        let mut snake = Snake {
            id: "snake1".to_string(),
            body: vec![Point::new(4, 4), Point::new(4, 3)],
            ..Default::default()
        };
        assert!(snake.is_alive());

        snake.death = Some(Death { cause: "death-cause".to_string(), turn: 1 });
        assert!(!snake.is_alive());
    }
}
