use std::str::FromStr;

use tuple::Map;

use crate::{
    error::{ParseError, Result},
    settle::GROUND,
    stack::Stack,
};

type Corner = (i32, i32, i32);

fn parse_corner(line: usize, s: &str) -> Result<Corner> {
    let cs = s
        .split(',')
        .map(|c| {
            let c = c.trim();
            c.parse::<i32>().map_err(|_| ParseError::InvalidInteger {
                line,
                value: c.to_string(),
            })
        })
        .collect::<Result<Vec<i32>>>()?;

    match cs[..] {
        [x, y, z] => Ok((x, y, z)),
        _ => Err(ParseError::WrongArity {
            line,
            found: cs.len(),
        }),
    }
}

/// Parses one `x1,y1,z1~x2,y2,z2` record. `line` is only used for error reporting.
pub fn parse_brick(line: usize, record: &str) -> Result<(Corner, Corner)> {
    let (a, b) = record
        .trim()
        .split_once('~')
        .ok_or(ParseError::MissingDelimiter { line })?
        .map(|s| parse_corner(line, s));
    let (a, b) = (a?, b?);

    let z = a.2.min(b.2);
    if i64::from(z) < GROUND {
        return Err(ParseError::BelowGround { line, z });
    }

    Ok((a, b))
}

/// Reads a whole snapshot, one brick per non-blank line.
pub fn parse_stack(input: &str) -> Result<Stack> {
    let corners = input
        .lines()
        .enumerate()
        .filter(|(_, record)| !record.trim().is_empty())
        .map(|(i, record)| parse_brick(i + 1, record))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(bricks = corners.len(), "parsed snapshot");

    Ok(Stack::from_corners(corners))
}

impl FromStr for Stack {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Stack> {
        parse_stack(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brick::{BrickId, Span};

    #[test]
    fn parses_records() {
        let stack = parse_stack(
            "
            1,0,1~1,2,1

            2,2,9~0,2,8
            ",
        )
        .unwrap();

        assert_eq!(stack.len(), 2);
        let b = &stack[BrickId(1)];
        assert_eq!(b.x, Span { min: 0, max: 2 });
        assert_eq!(b.y, Span { min: 2, max: 2 });
        assert_eq!(b.z(), Span { min: 8, max: 9 });
    }

    #[test]
    fn rejects_malformed() {
        assert_eq!(
            parse_stack("1,0,1~1,2,1\n1,0,1 1,2,1"),
            Err(ParseError::MissingDelimiter { line: 2 })
        );
        assert_eq!(
            parse_brick(3, "1,0~1,2,1"),
            Err(ParseError::WrongArity { line: 3, found: 2 })
        );
        assert_eq!(
            parse_brick(1, "1,0,a~1,2,1"),
            Err(ParseError::InvalidInteger {
                line: 1,
                value: "a".to_string()
            })
        );
    }

    #[test]
    fn rejects_bricks_below_ground() {
        assert_eq!(
            parse_brick(1, "0,0,-2147483648~0,0,-2147483648"),
            Err(ParseError::BelowGround {
                line: 1,
                z: i32::MIN
            })
        );
        assert_eq!(
            parse_stack("0,0,1~0,0,1\n0,0,3~0,0,0"),
            Err(ParseError::BelowGround { line: 2, z: 0 })
        );
        assert!(parse_brick(1, "0,0,1~0,0,2147483647").is_ok());
    }

    #[test]
    fn from_str() {
        let stack: Stack = "0,0,1~0,0,1".parse().unwrap();
        assert_eq!(stack.len(), 1);
    }
}
