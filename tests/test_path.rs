use std::path::Path;

use webserv::http::path::{DEFAULT_DOCUMENT, PathError, resolve};

const ROOT: &str = "/srv/www";

fn root() -> &'static Path {
    Path::new(ROOT)
}

#[test]
fn test_resolve_plain_file() {
    let resolved = resolve("normal.html", root()).unwrap();

    assert_eq!(resolved.as_path(), Path::new("/srv/www/normal.html"));
    assert_eq!(resolved.relative(), "normal.html");
}

#[test]
fn test_resolve_nested_file() {
    let resolved = resolve("docs/api/v1.json", root()).unwrap();
    assert_eq!(resolved.as_path(), Path::new("/srv/www/docs/api/v1.json"));
}

#[test]
fn test_resolve_empty_and_dot_are_index() {
    for target in ["", ".", "./", "a/..", "/"] {
        let resolved = resolve(target, root()).unwrap();
        assert_eq!(resolved.relative(), DEFAULT_DOCUMENT, "target {:?}", target);
        assert_eq!(resolved.as_path(), Path::new("/srv/www/index.html"));
    }
}

#[test]
fn test_resolve_hidden_file_is_forbidden() {
    let result = resolve(".hidden", root());
    assert_eq!(result, Err(PathError::Hidden(".hidden".to_string())));
}

#[test]
fn test_resolve_well_known_is_forbidden() {
    assert!(resolve(".well-known/acme-challenge/token", root()).is_err());
}

#[test]
fn test_resolve_hidden_below_top_level_is_served() {
    let resolved = resolve("docs/.notes", root()).unwrap();
    assert_eq!(resolved.relative(), "docs/.notes");
}

#[test]
fn test_resolve_traversal_is_forbidden() {
    let targets = [
        "../../etc/passwd",
        "../../../../../../../../etc/passwd",
        "a/../../etc/passwd",
        "a/b/../../../../etc/passwd",
        "./../etc/passwd",
        "..//..//etc//passwd",
        "..",
    ];

    for target in targets {
        assert!(
            matches!(resolve(target, root()), Err(PathError::Escape(_))),
            "target {:?}",
            target
        );
    }
}

#[test]
fn test_resolve_dot_dot_inside_root_is_allowed() {
    let resolved = resolve("docs/old/../new/page.html", root()).unwrap();
    assert_eq!(resolved.relative(), "docs/new/page.html");
}

#[test]
fn test_resolve_never_escapes_root_at_any_depth() {
    for depth in 0..32 {
        for tail in ["", "x", ".x", "x/..", "a/b/c.html", "a/b/../../.."] {
            let target = format!("{}{}", "../".repeat(depth), tail);

            match resolve(&target, root()) {
                Ok(resolved) => {
                    assert!(resolved.as_path().starts_with(root()));
                    assert!(!resolved.relative().split('/').any(|s| s == ".."));
                }
                Err(PathError::Escape(_)) => {}
                Err(PathError::Hidden(rel)) => assert!(rel.starts_with('.')),
            }
        }
    }
}

#[test]
fn test_resolve_absolute_target_is_rooted() {
    let resolved = resolve("/etc/passwd", root()).unwrap();
    assert_eq!(resolved.as_path(), Path::new("/srv/www/etc/passwd"));
}

#[test]
fn test_resolve_redundant_separators() {
    let resolved = resolve("a//b///c.txt", root()).unwrap();
    assert_eq!(resolved.relative(), "a/b/c.txt");
}

#[test]
fn test_resolve_relative_root() {
    let resolved = resolve("index.html", Path::new(".")).unwrap();
    assert_eq!(resolved.as_path(), Path::new("./index.html"));
}
