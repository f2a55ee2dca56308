//! Layout checks keeping `tests/unit` a mirror of `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SOURCE_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";
    const TESTS_DIR: &str = "tests";

    fn root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    }

    /// Module organisation files, which only declare other modules
    fn is_module_file(relative: &str) -> bool {
        relative == "lib.rs" || relative == "main.rs" || relative.ends_with("mod.rs")
    }

    /// Every `.rs` file under `dir`, relative to it, using `/` separators
    fn rust_files(dir: &Path) -> io::Result<BTreeSet<String>> {
        let mut files = BTreeSet::new();
        collect(dir, dir, &mut files)?;
        Ok(files)
    }

    fn collect(base: &Path, dir: &Path, files: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();

            if path.is_dir() {
                collect(base, &path, files)?;
            } else if path.extension().is_some_and(|extension| extension == "rs") {
                let relative = path
                    .strip_prefix(base)
                    .map_err(|strip_error| io::Error::other(strip_error.to_string()))?;
                let parts: Vec<_> = relative
                    .components()
                    .map(|part| part.as_os_str().to_string_lossy().into_owned())
                    .collect();
                files.insert(parts.join("/"));
            }
        }
        Ok(())
    }

    fn report(header: &str, entries: &[String]) -> String {
        format!("{header}:\n  - {}", entries.join("\n  - "))
    }

    // Tests every source file has a unit test file at the same relative path
    // Verified by deleting tests/unit/spatial/grid.rs
    #[test]
    fn test_sources_have_unit_tests() {
        let sources = rust_files(&root().join(SOURCE_DIR));
        let units = rust_files(&root().join(UNIT_DIR));
        assert!(sources.is_ok(), "cannot read {SOURCE_DIR}: {sources:?}");
        assert!(units.is_ok(), "cannot read {UNIT_DIR}: {units:?}");

        let (Ok(sources), Ok(units)) = (sources, units) else {
            return;
        };

        let missing: Vec<String> = sources
            .iter()
            .filter(|source| !is_module_file(source) && !units.contains(*source))
            .map(|source| format!("{SOURCE_DIR}/{source} -> {UNIT_DIR}/{source}"))
            .collect();

        assert!(
            missing.is_empty(),
            "{}",
            report("Source files without unit tests", &missing)
        );
    }

    // Tests no unit test file outlives its source file
    // Verified by adding tests/unit/spatial/tiles.rs
    #[test]
    fn test_unit_tests_have_sources() {
        let sources = rust_files(&root().join(SOURCE_DIR)).unwrap_or_default();
        let units = rust_files(&root().join(UNIT_DIR)).unwrap_or_default();
        assert!(!units.is_empty(), "no unit tests found under {UNIT_DIR}");

        let orphaned: Vec<String> = units
            .iter()
            .filter(|unit| !unit.ends_with("mod.rs") && !sources.contains(*unit))
            .map(|unit| format!("{UNIT_DIR}/{unit} (no {SOURCE_DIR}/{unit})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "{}",
            report("Unit tests without source files", &orphaned)
        );
    }

    // Tests every test file defines at least one test
    // Verified by removing the tests from tests/unit/io/render.rs
    #[test]
    fn test_test_files_define_tests() {
        let tests = rust_files(&root().join(TESTS_DIR));
        assert!(tests.is_ok(), "cannot read {TESTS_DIR}: {tests:?}");

        let empty: Vec<String> = tests
            .unwrap_or_default()
            .into_iter()
            .filter(|file| !file.ends_with("mod.rs"))
            .filter(|file| {
                fs::read_to_string(root().join(TESTS_DIR).join(file))
                    .is_ok_and(|content| !content.contains("#[test]"))
            })
            .map(|file| format!("{TESTS_DIR}/{file}"))
            .collect();

        assert!(
            empty.is_empty(),
            "{}",
            report("Test files without #[test] functions", &empty)
        );
    }
}
