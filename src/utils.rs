use crate::engine::{Board, Tile, GRID_SIZE, NUM_SLOTS};

/// Parses an array of string slices into a `Board`.
///
/// Each string slice represents one row, top to bottom. Exactly `GRID_SIZE`
/// rows of exactly `GRID_SIZE` characters are required. The characters
/// `'1'..='8'` name the tiles (home index + 1) and `'.'` marks the empty
/// slot; anything else is an error. The tile set is validated by
/// `Board::from_slots`, so a missing or duplicated tile is also rejected.
///
/// # Examples
/// ```
/// use puzzle8_solver::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["123", "456", "78."]).unwrap();
/// assert!(board.resolved());
///
/// assert!(board_from_str_array(&["123", "456", "78X"]).is_err());
/// assert!(board_from_str_array(&["123", "456"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, String> {
    if s.len() != GRID_SIZE {
        return Err(format!(
            "Invalid number of rows. Expected {}, found {}",
            GRID_SIZE,
            s.len()
        ));
    }

    let mut slots = [None; NUM_SLOTS];

    for (r, row_str) in s.iter().enumerate() {
        if row_str.chars().count() != GRID_SIZE {
            return Err(format!(
                "Row {} has {} characters, expected {}",
                r,
                row_str.chars().count(),
                GRID_SIZE
            ));
        }

        for (c, char_tile) in row_str.chars().enumerate() {
            slots[r * GRID_SIZE + c] = match char_tile {
                '.' => None,
                '1'..='8' => Some(Tile::new(char_tile as u8 - b'1')),
                _ => {
                    return Err(format!(
                        "Unrecognized character '{}' in row {} col {}",
                        char_tile, r, c
                    ))
                }
            };
        }
    }

    Board::from_slots(slots).map_err(|e| format!("Invalid board content: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_from_str_array_valid() {
        let board = board_from_str_array(&["123", "456", "78."]).unwrap();
        assert!(board.resolved());
        assert_eq!(board.slots()[0], Some(Tile::new(0)));
        assert_eq!(board.slots()[NUM_SLOTS - 1], None);

        let scrambled = board_from_str_array(&["8.6", "547", "231"]).unwrap();
        assert_eq!(scrambled.slots()[0], Some(Tile::new(7)));
        assert_eq!(scrambled.slots()[1], None);
    }

    #[test]
    fn test_board_from_str_array_invalid_char() {
        let result = board_from_str_array(&["12X", "456", "78."]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unrecognized character 'X'"));

        // '0' and '9' are not tile labels on a 3x3 board.
        assert!(board_from_str_array(&["120", "456", "78."]).is_err());
        assert!(board_from_str_array(&["129", "456", "78."]).is_err());
    }

    #[test]
    fn test_board_from_str_array_wrong_row_count() {
        let result = board_from_str_array(&["123", "456"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid number of rows"));

        let result = board_from_str_array(&["123", "456", "78.", "..."]);
        assert!(result.is_err());
    }

    #[test]
    fn test_board_from_str_array_wrong_row_length() {
        let result = board_from_str_array(&["1234", "56.", "78"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Row 0 has 4 characters"));
    }

    #[test]
    fn test_board_from_str_array_duplicate_tile() {
        let result = board_from_str_array(&["113", "456", "78."]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("more than once"));
    }

    #[test]
    fn test_board_from_str_array_missing_empty_slot() {
        // All eight tiles plus a duplicate leaves no empty slot.
        let result = board_from_str_array(&["123", "456", "788"]);
        assert!(result.is_err());
    }
}
