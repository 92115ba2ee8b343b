#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use bst_trace::{Bst, Node};

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var("BST_TRACE_UPDATE_SNAPSHOTS").is_ok() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    if normalize(&expected) != normalize(actual) {
        panic!(
            "Snapshot mismatch for {:?}. Set BST_TRACE_UPDATE_SNAPSHOTS=1 to regenerate.\nExpected:\n{}\nActual:\n{}",
            path,
            expected,
            actual
        );
    }
}

fn normalize(input: &str) -> String {
    input.replace("\r\n", "\n")
}

/// Every node's left descendants are smaller and right descendants larger.
pub fn assert_bst_invariant(bst: &Bst) {
    fn check(node: Option<&Node>, lower: Option<i64>, upper: Option<i64>) {
        let Some(node) = node else {
            return;
        };
        if let Some(lo) = lower {
            assert!(node.value() > lo, "{} should be > {}", node.value(), lo);
        }
        if let Some(hi) = upper {
            assert!(node.value() < hi, "{} should be < {}", node.value(), hi);
        }
        check(node.left(), lower, Some(node.value()));
        check(node.right(), Some(node.value()), upper);
    }
    check(bst.root(), None, None);
}

/// Sorted, deduplicated copy of `values`.
pub fn value_set(values: &[i64]) -> Vec<i64> {
    let mut set = values.to_vec();
    set.sort_unstable();
    set.dedup();
    set
}
