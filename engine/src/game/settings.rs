use serde::Deserialize;

use super::board::SUPPORTED_SIDE_SIZES;
use super::types::{BotDifficulty, GameMode, Mark};

pub const MAX_NAME_LENGTH: usize = 16;
pub const DEFAULT_SIDE_SIZE: usize = 3;

/// Settings exactly as the setup form submits them. Everything is optional
/// text; `GameSettings::sanitize` turns this into something the session
/// constructor can trust.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGameSettings {
    pub board_size: Option<String>,
    pub player_one_name: Option<String>,
    pub player_two_name: Option<String>,
    pub player_one_mark: Option<String>,
    pub game_mode: Option<String>,
    pub bot_difficulty: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    pub side_size: usize,
    pub player_one_name: String,
    pub player_two_name: String,
    pub player_one_mark: Mark,
    pub game_mode: GameMode,
    pub bot_difficulty: BotDifficulty,
}

impl GameSettings {
    pub fn sanitize(raw: &RawGameSettings) -> Self {
        Self {
            side_size: parse_side_size(raw.board_size.as_deref()),
            player_one_name: format_player_name(raw.player_one_name.as_deref(), "Player 1"),
            player_two_name: format_player_name(raw.player_two_name.as_deref(), "Player 2"),
            player_one_mark: parse_mark(raw.player_one_mark.as_deref()),
            game_mode: parse_game_mode(raw.game_mode.as_deref()),
            bot_difficulty: parse_bot_difficulty(raw.bot_difficulty.as_deref()),
        }
    }
}

fn parse_side_size(raw: Option<&str>) -> usize {
    raw.unwrap_or("")
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|size| SUPPORTED_SIDE_SIZES.contains(size))
        .unwrap_or(DEFAULT_SIDE_SIZE)
}

fn format_player_name(raw: Option<&str>, fallback: &str) -> String {
    let trimmed = raw.unwrap_or("").trim();
    if trimmed.is_empty() {
        return fallback.to_string();
    }
    trimmed.chars().take(MAX_NAME_LENGTH).collect()
}

fn parse_mark(raw: Option<&str>) -> Mark {
    match raw.unwrap_or("").trim().to_uppercase().as_str() {
        "O" => Mark::O,
        _ => Mark::X,
    }
}

fn parse_game_mode(raw: Option<&str>) -> GameMode {
    match raw.unwrap_or("").trim().to_lowercase().as_str() {
        "bot" | "versus_bot" => GameMode::VersusBot,
        _ => GameMode::TwoPlayer,
    }
}

fn parse_bot_difficulty(raw: Option<&str>) -> BotDifficulty {
    match raw.unwrap_or("").trim().to_lowercase().as_str() {
        "medium" => BotDifficulty::Medium,
        "impossible" => BotDifficulty::Impossible,
        _ => BotDifficulty::Easy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_yields_defaults() {
        let settings = GameSettings::sanitize(&RawGameSettings::default());

        assert_eq!(settings.side_size, DEFAULT_SIDE_SIZE);
        assert_eq!(settings.player_one_name, "Player 1");
        assert_eq!(settings.player_two_name, "Player 2");
        assert_eq!(settings.player_one_mark, Mark::X);
        assert_eq!(settings.game_mode, GameMode::TwoPlayer);
        assert_eq!(settings.bot_difficulty, BotDifficulty::Easy);
    }

    #[test]
    fn test_whitespace_name_falls_back_to_positional_default() {
        let raw = RawGameSettings {
            player_one_name: Some("   ".to_string()),
            ..Default::default()
        };

        let settings = GameSettings::sanitize(&raw);

        assert_eq!(settings.player_one_name, "Player 1");
    }

    #[test]
    fn test_long_name_is_truncated_to_sixteen_characters() {
        let raw = RawGameSettings {
            player_two_name: Some("ABCDEFGHIJKLMNOPQRST".to_string()),
            ..Default::default()
        };

        let settings = GameSettings::sanitize(&raw);

        assert_eq!(settings.player_two_name, "ABCDEFGHIJKLMNOP");
        assert_eq!(settings.player_two_name.chars().count(), MAX_NAME_LENGTH);
    }

    #[test]
    fn test_name_is_trimmed_before_truncation() {
        let raw = RawGameSettings {
            player_one_name: Some("  Casey  ".to_string()),
            ..Default::default()
        };

        let settings = GameSettings::sanitize(&raw);

        assert_eq!(settings.player_one_name, "Casey");
    }

    #[test]
    fn test_unsupported_board_size_falls_back_to_three() {
        for value in ["", "2", "6", "ten", "-4", "3x3"] {
            let raw = RawGameSettings {
                board_size: Some(value.to_string()),
                ..Default::default()
            };
            assert_eq!(GameSettings::sanitize(&raw).side_size, 3, "value {value:?}");
        }
    }

    #[test]
    fn test_supported_board_sizes_are_kept() {
        for size in SUPPORTED_SIDE_SIZES {
            let raw = RawGameSettings {
                board_size: Some(size.to_string()),
                ..Default::default()
            };
            assert_eq!(GameSettings::sanitize(&raw).side_size, size);
        }
    }

    #[test]
    fn test_invalid_mark_falls_back_to_x() {
        for value in ["", "Z", "xo", "1"] {
            let raw = RawGameSettings {
                player_one_mark: Some(value.to_string()),
                ..Default::default()
            };
            assert_eq!(GameSettings::sanitize(&raw).player_one_mark, Mark::X);
        }

        let raw = RawGameSettings {
            player_one_mark: Some(" o ".to_string()),
            ..Default::default()
        };
        assert_eq!(GameSettings::sanitize(&raw).player_one_mark, Mark::O);
    }

    #[test]
    fn test_mode_and_difficulty_parse_with_fallbacks() {
        let raw = RawGameSettings {
            game_mode: Some("bot".to_string()),
            bot_difficulty: Some("Impossible".to_string()),
            ..Default::default()
        };

        let settings = GameSettings::sanitize(&raw);

        assert_eq!(settings.game_mode, GameMode::VersusBot);
        assert_eq!(settings.bot_difficulty, BotDifficulty::Impossible);

        let raw = RawGameSettings {
            game_mode: Some("multiplayer".to_string()),
            bot_difficulty: Some("nightmare".to_string()),
            ..Default::default()
        };

        let settings = GameSettings::sanitize(&raw);

        assert_eq!(settings.game_mode, GameMode::TwoPlayer);
        assert_eq!(settings.bot_difficulty, BotDifficulty::Easy);
    }

    #[test]
    fn test_raw_settings_deserialize_from_form_payload() {
        let payload = r#"
board_size: "4"
player_one_name: "Dana"
game_mode: "bot"
bot_difficulty: "medium"
"#;
        let raw: RawGameSettings = serde_yaml_ng::from_str(payload).unwrap();

        let settings = GameSettings::sanitize(&raw);

        assert_eq!(settings.side_size, 4);
        assert_eq!(settings.player_one_name, "Dana");
        assert_eq!(settings.player_two_name, "Player 2");
        assert_eq!(settings.game_mode, GameMode::VersusBot);
        assert_eq!(settings.bot_difficulty, BotDifficulty::Medium);
    }
}
