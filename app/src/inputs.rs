//! Resolves the paths given in the command line into the demos to read & the reports to write

use std::{
    fs,
    path::{Path, PathBuf},
};


/// The path meaning "read a single demo from stdin & write the report to stdout"
pub const STDIN_PATH: &str = "-";

/// What to read & where to write for one of the paths given in the command line
#[derive(Debug, PartialEq)]
pub struct ReportJob {
    /// Locators of the demos, in the order they should appear in the report
    pub demo_locators: Vec<String>,
    pub output: ReportOutput,
}

#[derive(Debug, PartialEq)]
pub enum ReportOutput {
    File(PathBuf),
    Stdout,
}

/// Resolves `path`:
///   - for a directory, all files directly inside it, sorted by name, reported in `<directory>.tsv`, next to it;
///   - for a file, just it, reported in `<file stem>.tsv`, next to it;
///   - for [STDIN_PATH], the standard input, reported to the standard output.
pub fn plan_report(path: &str) -> Result<ReportJob, String> {
    if path == STDIN_PATH {
        return Ok(ReportJob {
            demo_locators: vec![STDIN_PATH.to_string()],
            output: ReportOutput::Stdout,
        })
    }
    let input_path = Path::new(path);
    let metadata = fs::metadata(input_path)
        .map_err(|err| format!("Couldn't access '{path}': {err}"))?;
    if metadata.is_dir() {
        let Some(directory_name) = input_path.file_name()
            else {
                return Err(format!("Couldn't name the report for directory '{path}': please refer to it by its name"))
            };
        let mut demo_paths = fs::read_dir(input_path)
            .and_then(|entries| entries
                .map(|entry_result| entry_result.map(|entry| entry.path()))
                .collect::<Result<Vec<PathBuf>, _>>())
            .map_err(|err| format!("Couldn't list the demos in directory '{path}': {err}"))?;
        demo_paths.retain(|demo_path| demo_path.is_file());
        demo_paths.sort();
        Ok(ReportJob {
            demo_locators: demo_paths.iter()
                .map(|demo_path| demo_path.to_string_lossy().into_owned())
                .collect(),
            output: ReportOutput::File(input_path.with_file_name(format!("{}.tsv", directory_name.to_string_lossy()))),
        })
    } else {
        Ok(ReportJob {
            demo_locators: vec![path.to_string()],
            output: ReportOutput::File(input_path.with_extension("tsv")),
        })
    }
}


/// Unit tests for the [inputs](super) module
#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn stdin() {
        assert_eq!(plan_report("-"), Ok(ReportJob { demo_locators: vec!["-".to_string()], output: ReportOutput::Stdout }));
    }

    /// Directories are reported as a whole, with their files in name order -- subdirectories are not visited
    #[test]
    fn directories() {
        let base_dir = scratch_dir("directories");
        let demos_dir = base_dir.join("demos");
        fs::create_dir_all(demos_dir.join("old")).expect("Couldn't create the test directories");
        for file_name in ["b.dmo", "a.dmo", "c.dmo"] {
            fs::write(demos_dir.join(file_name), b"").expect("Couldn't create a test file");
        }
        let demos_path = demos_dir.to_string_lossy().into_owned();
        let expected = ReportJob {
            demo_locators: ["a.dmo", "b.dmo", "c.dmo"].iter()
                .map(|file_name| demos_dir.join(file_name).to_string_lossy().into_owned())
                .collect(),
            output: ReportOutput::File(base_dir.join("demos.tsv")),
        };
        assert_eq!(plan_report(&demos_path), Ok(expected));
        assert_eq!(plan_report(&format!("{demos_path}/")).map(|job| job.output), Ok(ReportOutput::File(base_dir.join("demos.tsv"))));
    }

    #[test]
    fn files() {
        let base_dir = scratch_dir("files");
        let demo_path = base_dir.join("duel.dmo");
        fs::write(&demo_path, b"").expect("Couldn't create a test file");
        let demo_path = demo_path.to_string_lossy().into_owned();
        assert_eq!(plan_report(&demo_path), Ok(ReportJob { demo_locators: vec![demo_path.clone()], output: ReportOutput::File(base_dir.join("duel.tsv")) }));
    }

    #[test]
    fn missing_paths() {
        let error = plan_report("/tmp/non-existing-demos").expect_err("Missing paths should be refused");
        assert!(error.starts_with("Couldn't access '/tmp/non-existing-demos': "), "Unexpected error: {error}");
    }


    /// A fresh, empty directory for the given test
    fn scratch_dir(test_name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cube2-demo-analyser-{}-{test_name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("Couldn't create the test directory");
        dir
    }
}
