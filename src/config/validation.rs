use log::warn;

use crate::config::TocConfig;
use crate::utils::error::{BoxResult, TocError};

const BULLET_CHARS: [char; 3] = ['-', '*', '+'];
const MAX_INDENTATION: usize = 8;

/// Validate the configuration
pub fn validate_config(config: &TocConfig) -> BoxResult<()> {
    validate_bullet(config)?;
    validate_indentation(config)?;

    if config.include_title && config.toc_title.is_some() {
        warn!("toc_title has no effect while include_title is enabled");
    }

    Ok(())
}

/// Only list markers that can never be read back as a heading
fn validate_bullet(config: &TocConfig) -> BoxResult<()> {
    if !BULLET_CHARS.contains(&config.bullet_char) {
        return Err(TocError::Config(format!(
            "Bullet character must be one of {:?}, got {:?}", BULLET_CHARS, config.bullet_char
        )).into());
    }
    Ok(())
}

fn validate_indentation(config: &TocConfig) -> BoxResult<()> {
    if config.indentation == 0 || config.indentation > MAX_INDENTATION {
        return Err(TocError::Config(format!(
            "Indentation must be between 1 and {}, got {}", MAX_INDENTATION, config.indentation
        )).into());
    }

    if config.indentation_char != ' ' && config.indentation_char != '\t' {
        return Err(TocError::Config(format!(
            "Indentation character must be a space or a tab, got {:?}", config.indentation_char
        )).into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&TocConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let hash_bullet = TocConfig { bullet_char: '#', ..TocConfig::default() };
        assert!(validate_config(&hash_bullet).is_err());

        let flat = TocConfig { indentation: 0, ..TocConfig::default() };
        assert!(validate_config(&flat).is_err());

        let dotted = TocConfig { indentation_char: '.', ..TocConfig::default() };
        assert!(validate_config(&dotted).is_err());
    }
}
