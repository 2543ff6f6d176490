//! Golden program tests
//!
//! Every `tests/programs/*.lzl` file is evaluated through the runner and
//! its rendered output compared against the `.out` sibling. Programs with
//! an `.err` sibling instead must fail with the recorded error code.

use std::fs;
use std::path::Path;

use lazel::runner;

#[test]
fn golden_programs() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("programs");
    let mut checked = 0;

    for entry in fs::read_dir(&dir).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().map(|e| e == "lzl").unwrap_or(false) {
            run_single_golden_test(&path);
            checked += 1;
        }
    }

    assert!(checked > 0, "no golden programs found in {:?}", dir);
}

fn run_single_golden_test(path: &Path) {
    let out_path = path.with_extension("out");
    let err_path = path.with_extension("err");

    let result = runner::run_file(path);

    if out_path.exists() {
        let expected = fs::read_to_string(&out_path).unwrap();
        let rendered = result.unwrap_or_else(|e| panic!("{:?} failed: {}", path, e));
        assert_eq!(
            rendered,
            expected.trim_end(),
            "output mismatch for {:?}",
            path
        );
    } else if err_path.exists() {
        let expected = fs::read_to_string(&err_path).unwrap();
        let message = match result {
            Err(e) => e.to_string(),
            Ok(rendered) => panic!("{:?} unexpectedly succeeded with {}", path, rendered),
        };
        assert!(
            message.contains(expected.trim()),
            "error mismatch for {:?}: expected {:?} in {:?}",
            path,
            expected.trim(),
            message
        );
    } else {
        panic!("{:?} has neither a .out nor a .err sibling", path);
    }
}
