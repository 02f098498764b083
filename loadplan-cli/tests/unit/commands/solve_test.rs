use super::*;
use std::sync::{Arc, Mutex};

const PRAGMATIC_PROBLEM_PATH: &str = "../loadplan-pragmatic/tests/data/simple.problem.json";
const FULL_CONFIG_PATH: &str = "tests/data/config.full.json";

struct DummyWrite {}

impl Write for DummyWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[derive(Clone, Default)]
struct SharedWrite {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for SharedWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().expect("poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn get_solve_matches(params: &[&str]) -> ArgMatches {
    let args = [&["solve", PRAGMATIC_PROBLEM_PATH], params].concat();

    get_solve_app().try_get_matches_from(args).unwrap()
}

fn run_solve_with_out_writer(matches: &ArgMatches) -> Result<(), String> {
    run_solve(matches, |_| BufWriter::new(Box::new(DummyWrite {})))
}

#[test]
fn can_solve_pragmatic_problem() {
    run_solve_with_out_writer(&get_solve_matches(&[])).unwrap();
}

#[test]
fn can_solve_pragmatic_problem_with_config_and_check() {
    let matches = get_solve_matches(&["--config", FULL_CONFIG_PATH, "--check"]);

    run_solve_with_out_writer(&matches).unwrap();
}

#[test]
fn can_write_solution_into_out_writer() {
    let writer = SharedWrite::default();
    let matches = get_solve_matches(&["--out-result", "solution.json"]);

    run_solve(&matches, |path| {
        assert_eq!(path.map(|path| path.as_str()), Some("solution.json"));
        BufWriter::new(Box::new(writer.clone()))
    })
    .unwrap();

    let json = String::from_utf8(writer.buffer.lock().expect("poisoned").clone()).expect("not utf8");
    assert!(json.contains("\"plans\""));
    assert!(json.contains("\"schedule\""));
}

#[test]
fn can_require_problem_path() {
    get_solve_app().try_get_matches_from(vec!["solve"]).unwrap_err();
}

#[test]
fn can_parse_flags() {
    let matches = get_solve_matches(&["--log", "--check", "-c", FULL_CONFIG_PATH, "-o", "out.json"]);

    assert!(matches.get_flag(LOG_ARG_NAME));
    assert!(matches.get_flag(CHECK_ARG_NAME));
    assert_eq!(matches.get_one::<String>(CONFIG_ARG_NAME).map(|s| s.as_str()), Some(FULL_CONFIG_PATH));
    assert_eq!(matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|s| s.as_str()), Some("out.json"));
}

#[test]
fn can_report_invalid_config_settings() {
    let config = tempfile::NamedTempFile::new().expect("cannot create temp file");
    std::fs::write(config.path(), r#"{ "schedule": { "dockCount": 0 } }"#).expect("cannot write config");
    let config_path = config.path().to_string_lossy().to_string();
    let matches = get_solve_matches(&["--config", config_path.as_str()]);

    let result = run_solve_with_out_writer(&matches);

    assert_eq!(result, Err("cannot read config: 'dock count should be at least 1'".to_string()));
}
