//! Loading real configuration files from disk.

use proptest::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tinyfetch_core::{BorderStyle, Geometry, ModuleKind, NamedColor, SeparatorMode, WidthMode};
use tinyfetch_yaml::{load, load_from_file, Manifest, ModuleSection, ParseError};

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tinyfetch-yaml-it-{name}"));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.yml");
    fs::write(&path, contents).unwrap();
    path
}

const FULL: &str = r#"
title:
  filePath: ~/logo.txt
  color: magenta
container:
  marginLeft: 0
  marginRight: 3
  paddingLeft: 2
  paddingRight: 0
  borderColor: blue
  borderStyle: double
  separator: last
  widthMode: columns
modules:
  - type: hostname
    prefix: "@ "
    prefixColor: yellow
    label: host
    labelColor: red
    infoColor: green
  - type: os
  - type: command
    label: greeting
    script: echo hi
  - type: colors
"#;

#[test]
fn test_full_file_validates_in_order() {
    let dir = scratch("full");
    let path = write_config(&dir, FULL);
    let config = load_from_file(&path, Some(Path::new("/home/alice"))).unwrap();

    let title = config.title.unwrap();
    assert_eq!(title.path, PathBuf::from("/home/alice/logo.txt"));
    assert_eq!(title.color, NamedColor::Magenta);

    assert_eq!(
        config.geometry,
        Geometry {
            margin_left: 0,
            margin_right: 3,
            padding_left: 2,
            padding_right: 0,
            border_color: "blue".to_string(),
            border_style: BorderStyle::Double,
            separator: SeparatorMode::Last,
            width_mode: WidthMode::Columns,
        }
    );

    let kinds: Vec<ModuleKind> = config.rows.iter().map(|r| r.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ModuleKind::Hostname,
            ModuleKind::Os,
            ModuleKind::Command,
            ModuleKind::Colors
        ]
    );

    let host = &config.rows[0];
    assert_eq!(host.label(), "host");
    assert_eq!(host.prefix(), Some("@ "));
    assert_eq!(host.prefix_color(), Some("yellow"));
    assert_eq!(host.label_color(), Some("red"));
    assert_eq!(host.info_color(), Some("green"));

    let os = &config.rows[1];
    assert_eq!(os.label(), "os");
    assert_eq!(os.label_color(), None);
    assert_eq!(os.info_color(), Some("white"));

    assert_eq!(config.rows[2].label(), "greeting");
    assert_eq!(config.rows[2].script(), Some("echo hi"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_explicit_path_must_exist() {
    let missing = std::env::temp_dir().join("tinyfetch-yaml-it-missing/config.yml");
    let err = load(Some(&missing)).unwrap_err();
    assert!(matches!(err, ParseError::Io { .. }));
    assert!(err.to_string().contains("config.yml"));
}

#[test]
fn test_malformed_yaml_is_a_parse_error() {
    let dir = scratch("malformed");
    let path = write_config(&dir, "modules: [\n  - type: user\n");
    let err = load_from_file(&path, None).unwrap_err();
    assert!(matches!(err, ParseError::Yaml(_)));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_empty_modules_rejected() {
    let dir = scratch("empty-modules");
    let path = write_config(&dir, "container:\n  marginLeft: 4\nmodules: []\n");
    let err = load_from_file(&path, None).unwrap_err();
    assert!(matches!(err, ParseError::Validation(_)));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_unknown_module_type_names_index() {
    let dir = scratch("unknown-type");
    let path = write_config(&dir, "modules:\n  - type: os\n  - type: gpu\n");
    let err = load_from_file(&path, None).unwrap_err();
    assert!(err.to_string().contains("modules[1].type"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_starter_config_loads() {
    let dir = scratch("starter");
    let path = write_config(&dir, Manifest::default_yaml());
    let config = load_from_file(&path, None).unwrap();
    assert!(config.title.is_none());
    assert_eq!(config.geometry, Geometry::default());
    assert_eq!(config.rows.len(), 8);
    assert_eq!(config.rows[0].kind(), ModuleKind::User);
    assert_eq!(config.rows[7].kind(), ModuleKind::Colors);
    let _ = fs::remove_dir_all(&dir);
}

fn arb_module() -> impl Strategy<Value = ModuleSection> {
    (
        prop::sample::select(
            ModuleKind::all()
                .iter()
                .filter(|k| **k != ModuleKind::Command)
                .copied()
                .collect::<Vec<_>>(),
        ),
        prop::option::of("[a-z ]{1,10}"),
        prop::option::of(prop::sample::select(vec!["red", "cyan", "teal", "White"])),
    )
        .prop_map(|(kind, label, color)| ModuleSection {
            kind: Some(kind.name().to_string()),
            label,
            label_color: color.map(str::to_string),
            info_color: color.map(str::to_string),
            ..ModuleSection::default()
        })
}

proptest! {
    #[test]
    fn prop_validated_rows_follow_module_order(
        modules in prop::collection::vec(arb_module(), 1..10),
    ) {
        let manifest = Manifest {
            modules: Some(modules.clone()),
            ..Manifest::default()
        };
        let yaml = manifest.to_yaml().unwrap();
        let config = Manifest::from_yaml(&yaml).unwrap().validate(None).unwrap();

        prop_assert_eq!(config.rows.len(), modules.len());
        for (row, module) in config.rows.iter().zip(&modules) {
            prop_assert_eq!(Some(row.kind().name()), module.kind.as_deref());
            let expected_label = module.label.as_deref().unwrap_or(row.kind().name());
            prop_assert_eq!(row.label(), expected_label);
            // info color is always a known name
            let info = row.info_color().unwrap();
            prop_assert!(NamedColor::from_name(info).is_some());
        }
    }
}
