//! Fixture file loading.

use std::fs;
use std::path::Path;

use crate::{parse_fixture, ScenarioFixture, SpecError, SpecResult};

/// Load a single fixture file.
pub fn load_fixture(path: &Path) -> SpecResult<ScenarioFixture> {
    let content = fs::read_to_string(path).map_err(|source| SpecError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_fixture(&content).map_err(|e| match e {
        SpecError::Parse { line, message } => SpecError::Fixture {
            path: path.to_path_buf(),
            line,
            message,
        },
        other => other,
    })
}

/// Load all `*.toml` fixtures under `dir`, keyed by relative path and
/// sorted by it.
pub fn load_all_fixtures(dir: &Path) -> SpecResult<Vec<(String, ScenarioFixture)>> {
    let mut fixtures = Vec::new();
    load_fixtures_recursive(dir, dir, &mut fixtures)?;
    fixtures.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(fixtures)
}

fn load_fixtures_recursive(
    base: &Path,
    dir: &Path,
    fixtures: &mut Vec<(String, ScenarioFixture)>,
) -> SpecResult<()> {
    if !dir.is_dir() {
        return Ok(());
    }

    let read_error = |source: std::io::Error| SpecError::Read {
        path: dir.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();

        if path.is_dir() {
            load_fixtures_recursive(base, &path, fixtures)?;
        } else if path.extension().map_or(false, |e| e == "toml") {
            let relative = path.strip_prefix(base).unwrap_or(&path);
            let fixture = load_fixture(&path)?;
            fixtures.push((relative.display().to_string(), fixture));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join("void-check.toml");
        let fixture = load_fixture(&path).unwrap();
        assert_eq!(fixture.title.as_deref(), Some("Void check"));
    }

    #[test]
    fn test_load_all_fixtures() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
        let fixtures = load_all_fixtures(&dir).unwrap();
        let names: Vec<_> = fixtures.iter().map(|(name, _)| name.replace('\\', "/")).collect();
        assert!(names.contains(&"bills/utility-bill.toml".to_string()));
        assert!(fixtures.len() >= 4);
    }

    #[test]
    fn bad_fixture_names_its_path() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "text = ").unwrap();

        let err = load_fixture(file.path()).unwrap_err();
        assert!(matches!(err, SpecError::Fixture { line, .. } if line >= 1));
        assert!(err
            .to_string()
            .starts_with(&format!("{}:", file.path().display())));

        let missing = load_fixture(&file.path().with_extension("gone")).unwrap_err();
        assert!(matches!(missing, SpecError::Read { .. }));
    }

    #[test]
    fn missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let fixtures = load_all_fixtures(&dir.path().join("nope")).unwrap();
        assert!(fixtures.is_empty());
    }
}
