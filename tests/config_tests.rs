use books::config::{load_config, Config};
use books::BooksError;
use std::fs;
use tempfile::TempDir;

fn parse(content: &str) -> Config {
    toml::from_str(content).unwrap()
}

#[test]
fn test_partial_sections_fill_in_defaults() {
    let config = parse("[display]\npage_size = 10\n");
    assert_eq!(config.display.currency_symbol, "$");
    assert_eq!(config.display.page_size, 10);
    assert_eq!(config.invoice.number_format, "INV-{seq:04}");
    assert_eq!(config.export.output_dir, "output");

    let config = parse("[display]\ncurrency_symbol = \"€\"\n[invoice]\n[export]\n");
    assert_eq!(config.display.currency_symbol, "€");
    assert_eq!(config.display.page_size, 5);
    assert_eq!(config.invoice.number_format, "INV-{seq:04}");
    assert!(config.validate().is_ok());
}

#[test]
fn test_number_format_cannot_name_other_directories() {
    let config = parse("[invoice]\nnumber_format = \"../INV-{seq}\"\n");
    match config.validate() {
        Err(BooksError::Validation(errors)) => {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            assert_eq!(
                messages,
                vec!["invoice.number_format: must not contain path separators"]
            );
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_load_config_accepts_display_without_currency() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("config.toml"), "[display]\npage_size = 10\n").unwrap();

    let config = load_config(temp_dir.path()).unwrap();
    assert_eq!(config.display.currency_symbol, "$");
    assert_eq!(config.display.page_size, 10);
}
