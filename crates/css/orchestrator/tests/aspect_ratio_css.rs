#![cfg(test)]

use anyhow::Result;
use css_orchestrator::{HostConfig, UtilityHost, build_css, build_css_batch};
use std::fs;

/// Strip whitespace and semicolons so formatting differences do not matter.
fn stripped(css: &str) -> String {
    css.chars()
        .filter(|character| !character.is_whitespace() && *character != ';')
        .collect()
}

fn assert_includes_css(received: &str, expected: &str) {
    assert!(
        stripped(received).contains(&stripped(expected)),
        "expected\n{received}\nto include CSS\n{expected}"
    );
}

/// Build CSS for a configuration with a single `sm` screen.
fn generate(theme_and_variants: &str) -> Result<String> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut config = HostConfig::from_json_str(theme_and_variants)?;
    config.theme.screens.clear();
    config
        .theme
        .screens
        .insert("sm".to_owned(), "640px".to_owned());
    build_css(&config)
}

const STRUCTURAL: &str = r#"
    .aspect-ratio {
      position: relative
    }

    .aspect-ratio::before {
      content: "";
      display: block
    }

    .aspect-ratio > :first-child {
      position: absolute;
      top: 0;
      left: 0;
      width: 100%;
      height: 100%
    }

    .aspect-ratio > img {
      height: auto
    }

    .min-h-aspect-ratio::before {
      content: "";
      width: 1px;
      margin-left: -1px;
      float: left;
      height: 0
    }

    .min-h-aspect-ratio::after {
      content: "";
      display: table;
      clear: both
    }"#;

#[test]
fn there_is_no_output_by_default() -> Result<()> {
    let css = generate("{}")?;
    assert_eq!(css, "");
    Ok(())
}

#[test]
fn base_classes_are_generated() -> Result<()> {
    let css = generate(r#"{ "theme": { "aspectRatio": { "2/1": [2, 1] } } }"#)?;
    assert_includes_css(&css, STRUCTURAL);
    assert_includes_css(
        &css,
        r#"
        @media (min-width: 640px) {
          .sm\:aspect-ratio {
            position: relative
          }

          .sm\:aspect-ratio::before {
            content: "";
            display: block
          }

          .sm\:aspect-ratio > :first-child {
            position: absolute;
            top: 0;
            left: 0;
            width: 100%;
            height: 100%
          }

          .sm\:aspect-ratio > img {
            height: auto
          }

          .sm\:min-h-aspect-ratio::before {
            content: "";
            width: 1px;
            margin-left: -1px;
            float: left;
            height: 0
          }

          .sm\:min-h-aspect-ratio::after {
            content: "";
            display: table;
            clear: both
          }"#,
    );
    Ok(())
}

#[test]
fn ratios_can_be_customized() -> Result<()> {
    let css = generate(r#"{ "theme": { "aspectRatio": { "2/1": [2, 1], "16/9": [16, 9] } } }"#)?;
    assert_includes_css(
        &css,
        r"
        .aspect-ratio-2\/1::before {
          padding-bottom: 50%;
        }
        .aspect-ratio-16\/9::before {
          padding-bottom: 56.25%;
        }",
    );
    assert_includes_css(
        &css,
        r"
        @media (min-width: 640px) {",
    );
    assert_includes_css(
        &css,
        r"
          .sm\:aspect-ratio-2\/1::before {
            padding-bottom: 50%;
          }
          .sm\:aspect-ratio-16\/9::before {
            padding-bottom: 56.25%;
          }
        }",
    );
    Ok(())
}

#[test]
fn ratios_can_be_arrays_or_fractions() -> Result<()> {
    let css = generate(
        r#"{
            "theme": { "aspectRatio": { "5/2": [5, 2], "16/9": 1.7777777777777777 } },
            "variants": { "aspectRatio": [] }
        }"#,
    )?;
    assert_includes_css(
        &css,
        r"
        .aspect-ratio-5\/2::before {
          padding-bottom: 40%;
        }
        .aspect-ratio-16\/9::before {
          padding-bottom: 56.25%;
        }",
    );
    assert!(!css.contains("@media"));
    Ok(())
}

#[test]
fn ratio_can_be_zero() -> Result<()> {
    let css = generate(
        r#"{ "theme": { "aspectRatio": { "none": 0 } }, "variants": { "aspectRatio": [] } }"#,
    )?;
    assert_includes_css(
        &css,
        r"
        .aspect-ratio-none::before {
          padding-bottom: 0;
        }",
    );
    Ok(())
}

#[test]
fn variants_can_be_customized() -> Result<()> {
    let css = generate(
        r#"{ "theme": { "aspectRatio": { "2/1": [2, 1] } }, "variants": { "aspectRatio": ["hover"] } }"#,
    )?;
    assert_includes_css(
        &css,
        r"
        .aspect-ratio-2\/1::before {
          padding-bottom: 50%;
        }",
    );
    assert_includes_css(
        &css,
        r"
        .hover\:aspect-ratio-2\/1:hover::before {
          padding-bottom: 50%;
        }",
    );
    assert!(!css.contains("@media"));
    Ok(())
}

#[test]
fn responsive_group_hover_keeps_the_group_ancestor() -> Result<()> {
    let css = generate(
        r#"{
            "theme": { "aspectRatio": { "2/1": [2, 1] } },
            "variants": { "aspectRatio": ["responsive", "group-hover"] }
        }"#,
    )?;
    assert_includes_css(
        &css,
        r"
        .group:hover .group-hover\:aspect-ratio-2\/1::before {
          padding-bottom: 50%;
        }",
    );
    assert_includes_css(
        &css,
        r"
        .group:hover .sm\:group-hover\:aspect-ratio-2\/1::before {
          padding-bottom: 50%;
        }",
    );
    assert!(!css.contains(r".sm\:group:hover"));
    Ok(())
}

#[test]
fn prefix_and_important_reach_the_output() -> Result<()> {
    let css = generate(
        r#"{
            "prefix": "tw-",
            "important": true,
            "theme": { "aspectRatio": { "2/1": [2, 1] } },
            "variants": { "aspectRatio": [] }
        }"#,
    )?;
    assert_includes_css(
        &css,
        r"
        .tw-aspect-ratio-2\/1::before {
          padding-bottom: 50% !important;
        }",
    );
    assert_includes_css(&css, ".tw-aspect-ratio > img { height: auto !important }");
    Ok(())
}

#[test]
fn unknown_variant_is_an_error() -> Result<()> {
    let host = UtilityHost::from_json_str(
        r#"{ "theme": { "aspectRatio": { "2/1": [2, 1] } }, "variants": { "aspectRatio": ["sideways"] } }"#,
    )?;
    assert_eq!(
        host.config().configured_variants("aspectRatio"),
        Some(&["sideways".to_owned()][..])
    );
    let Err(error) = host.css() else {
        panic!("`sideways` should not be accepted");
    };
    assert!(format!("{error:#}").contains("`sideways`"));
    Ok(())
}

#[test]
fn batch_keeps_order_and_isolates_failures() -> Result<()> {
    let good = HostConfig::from_json_str(
        r#"{ "theme": { "aspectRatio": { "2/1": [2, 1] } }, "variants": { "aspectRatio": [] } }"#,
    )?;
    let bad = HostConfig::from_json_str(
        r#"{ "theme": { "aspectRatio": { "2/1": [2, 1] } }, "variants": { "aspectRatio": ["wiggle"] } }"#,
    )?;
    let results = build_css_batch(&[good.clone(), bad, HostConfig::default()]);
    assert_eq!(results.len(), 3);
    match &results[0] {
        Ok(css) => assert_eq!(css, &build_css(&good)?),
        Err(error) => panic!("first configuration failed: {error:#}"),
    }
    let Err(error) = &results[1] else {
        panic!("second configuration should fail");
    };
    assert!(format!("{error:#}").contains("configuration #1"));
    assert!(matches!(&results[2], Ok(css) if css.is_empty()));
    Ok(())
}

#[test]
fn configuration_loads_from_a_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("utilities.json");
    fs::write(
        &path,
        r#"{ "theme": { "screens": { "sm": "640px" }, "aspectRatio": { "1/1": 1 } } }"#,
    )?;
    let config = HostConfig::from_path(&path)?;
    let css = build_css(&config)?;
    assert_includes_css(&css, r".aspect-ratio-1\/1::before { padding-bottom: 100% }");
    assert_includes_css(&css, r".sm\:aspect-ratio-1\/1::before { padding-bottom: 100% }");
    Ok(())
}
