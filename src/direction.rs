use crate::Result;
use regex::Regex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Unit (column, row) offset. Rows grow upward, so falling is -1.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
        }
    }
}

/// Parses a jet pattern such as `>>><<>`. Surrounding whitespace is ignored;
/// anything else that isn't `<` or `>` is rejected with its index.
pub fn parse_push_pattern(s: &str) -> Result<Vec<Direction>> {
    let s = s.trim();
    if s.is_empty() {
        anyhow::bail!("push pattern is empty");
    }

    let re = Regex::new(r"[^<>]")?;
    if let Some(m) = re.find(s) {
        let index = s[..m.start()].chars().count();
        anyhow::bail!(
            "invalid push pattern symbol {:?} at index {}",
            m.as_str(),
            index
        );
    }

    Ok(s.chars()
        .map(|c| match c {
            '<' => Direction::Left,
            _ => Direction::Right,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_directions() {
        let pattern = parse_push_pattern(">><\n").unwrap();
        assert_eq!(
            pattern,
            vec![Direction::Right, Direction::Right, Direction::Left]
        );
    }

    #[test]
    fn rejects_empty_pattern() {
        let err = parse_push_pattern(" \n").unwrap_err();
        assert_eq!(err.to_string(), "push pattern is empty");
    }

    #[test]
    fn reports_first_bad_symbol_and_index() {
        let err = parse_push_pattern("<<>v><x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid push pattern symbol \"v\" at index 3"
        );
    }

    #[test]
    fn down_falls_toward_the_floor() {
        assert_eq!(Direction::Down.offset(), (0, -1));
        assert_eq!(Direction::Left.offset(), (-1, 0));
    }
}
