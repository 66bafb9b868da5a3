#![allow(dead_code)] // Functions used by different test binaries appear unused per-binary

//! Shared test utilities for folder2rs-generate integration tests.

use folder2rs_generate::decode_fragment;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Writes `files` below `root`, creating parent directories as needed.
pub fn write_tree(root: &Path, files: &[(&str, &[u8])]) {
    for (relative, contents) in files {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }
}

/// Reads every file below `root` back into a map keyed like the generator keys them.
pub fn read_tree(root: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut files = BTreeMap::new();
    collect(root, root, &mut files);
    files
}

fn collect(root: &Path, dir: &Path, files: &mut BTreeMap<String, Vec<u8>>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect(root, &path, files);
        } else {
            let key = path
                .strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_str().unwrap())
                .collect::<Vec<_>>()
                .join("/");
            files.insert(key, fs::read(&path).unwrap());
        }
    }
}

fn unescape(literal: &str) -> String {
    literal.replace("\\\"", "\"").replace("\\\\", "\\")
}

/// Extracts the embedded table from a generated Rust module.
pub fn parse_rust_assets(output: &str) -> BTreeMap<String, Vec<u8>> {
    let mut assets = BTreeMap::new();
    let mut lines = output.lines().map(str::trim);

    while let Some(line) = lines.next() {
        let Some(key) = line
            .strip_suffix("\",")
            .and_then(|rest| rest.strip_prefix('"'))
        else {
            continue;
        };
        assert_eq!(lines.next(), Some("&["), "entry {key} is not a byte slice");

        let mut fragment = String::new();
        for line in lines.by_ref() {
            if line == "]," {
                break;
            }
            fragment.push_str(line);
            fragment.push('\n');
        }
        assets.insert(unescape(key), decode_fragment(&fragment).unwrap());
    }

    assets
}

/// Extracts the embedded table from a generated Go file.
pub fn parse_go_assets(output: &str) -> BTreeMap<String, Vec<u8>> {
    let mut assets = BTreeMap::new();
    let mut lines = output.lines().map(str::trim);

    while let Some(line) = lines.next() {
        let Some(key) = line
            .strip_suffix("\": {")
            .and_then(|rest| rest.strip_prefix('"'))
        else {
            continue;
        };

        let mut fragment = String::new();
        for line in lines.by_ref() {
            if line == "}," {
                break;
            }
            fragment.push_str(line);
            fragment.push('\n');
        }
        assets.insert(unescape(key), decode_fragment(&fragment).unwrap());
    }

    assets
}
