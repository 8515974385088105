use super::{ConfigError, SerializableConfig};
use log::debug;
use std::{
    fs::{canonicalize, read_to_string},
    path::{Path, PathBuf},
};

/// Reads a configuration file together with the files it extends.
///
/// An `extend` path is relative to the file naming it. Fields in an extending
/// file override the extended ones.
pub fn read_config(path: &Path) -> Result<SerializableConfig, ConfigError> {
    read_extended_config(&canonicalize(path)?, &mut vec![])
}

fn read_extended_config(
    path: &Path,
    extending: &mut Vec<PathBuf>,
) -> Result<SerializableConfig, ConfigError> {
    if let Some(index) = extending.iter().position(|item| item == path) {
        let mut paths = extending.split_off(index);
        paths.push(path.to_owned());
        return Err(ConfigError::CircularConfigFiles(paths));
    }

    let config = toml::from_str::<SerializableConfig>(&read_to_string(path)?)?;

    let Some(base) = config.extend() else {
        return Ok(config);
    };
    let base = canonicalize(path.parent().unwrap_or_else(|| Path::new(".")).join(base))?;

    debug!("{} extends {}", path.display(), base.display());
    extending.push(path.to_owned());

    let mut base = read_extended_config(&base, extending)?;
    base.merge(config);

    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, read_config};
    use crate::config::compile_config;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::fs::{create_dir_all, write};
    use tempfile::tempdir;

    #[test]
    fn read_single_file() {
        let directory = tempdir().unwrap();
        let file = directory.path().join("tagsmith.toml");

        write(
            &file,
            indoc! {r#"
                self_closing_tags = false
            "#},
        )
        .unwrap();

        let config = compile_config(read_config(&file).unwrap()).unwrap();

        assert!(!config.html().self_closing_tags());
    }

    #[test]
    fn merge_configs() {
        let directory = tempdir().unwrap();
        let directory = directory.path();
        let base_file = directory.join("base.toml");
        let middle_file = directory.join("middle.toml");
        let child_file = directory.join("child.toml");

        write(
            &base_file,
            indoc! {r#"
                self_closing_tags = false
                self_closing_elements = ["br"]
                [globals]
                site = "base"
                lang = "en"
            "#},
        )
        .unwrap();
        write(
            &middle_file,
            indoc! {r#"
                extend = "base.toml"
                self_closing_elements = ["br", "hr"]
                [globals]
                site = "middle"
            "#},
        )
        .unwrap();
        write(
            &child_file,
            indoc! {r#"
                extend = "middle.toml"
                self_closing_tags = true
            "#},
        )
        .unwrap();

        let config = compile_config(read_config(&child_file).unwrap()).unwrap();

        assert!(config.html().self_closing_tags());
        assert_eq!(
            config.html().self_closing_elements().collect::<Vec<_>>(),
            ["br", "hr"]
        );
        assert_eq!(config.globals().get("site"), Some(&json!("middle")));
        assert_eq!(config.globals().get("lang"), Some(&json!("en")));
    }

    #[test]
    fn resolve_relative_files() {
        let directory = tempdir().unwrap();
        let directory = directory.path();
        let base_file = directory.join("base.toml");
        let sub_directory = directory.join("nested");
        let child_file = sub_directory.join("child.toml");

        create_dir_all(&sub_directory).unwrap();
        write(
            &base_file,
            indoc! {r#"
                self_closing_tags = false
            "#},
        )
        .unwrap();
        write(
            &child_file,
            indoc! {r#"
                extend = "../base.toml"
            "#},
        )
        .unwrap();

        let config = compile_config(read_config(&child_file).unwrap()).unwrap();

        assert!(!config.html().self_closing_tags());
    }

    #[test]
    fn detect_circular_extends() {
        let directory = tempdir().unwrap();
        let directory = directory.path();
        let first_file = directory.join("first.toml");
        let second_file = directory.join("second.toml");

        write(
            &first_file,
            indoc! {r#"
                extend = "second.toml"
            "#},
        )
        .unwrap();
        write(
            &second_file,
            indoc! {r#"
                extend = "first.toml"
            "#},
        )
        .unwrap();

        let Err(ConfigError::CircularConfigFiles(paths)) = read_config(&first_file) else {
            panic!("circular configuration files not detected");
        };

        assert_eq!(
            paths
                .iter()
                .map(|path| path.file_name().unwrap().to_str().unwrap())
                .collect::<Vec<_>>(),
            ["first.toml", "second.toml", "first.toml"]
        );
    }

    #[test]
    fn detect_self_extension() {
        let directory = tempdir().unwrap();
        let file = directory.path().join("self.toml");

        write(&file, "extend = \"self.toml\"\n").unwrap();

        assert!(matches!(
            read_config(&file),
            Err(ConfigError::CircularConfigFiles(paths)) if paths.len() == 2
        ));
    }

    #[test]
    fn read_missing_base_file() {
        let directory = tempdir().unwrap();
        let file = directory.path().join("child.toml");

        write(&file, "extend = \"missing.toml\"\n").unwrap();

        assert!(matches!(read_config(&file), Err(ConfigError::Io(_))));
    }

    #[test]
    fn read_missing_file() {
        let directory = tempdir().unwrap();

        assert!(matches!(
            read_config(&directory.path().join("missing.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
