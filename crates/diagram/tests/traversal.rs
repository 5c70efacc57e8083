//! Traversal integration tests
//!
//! Builds a throwaway C# project on disk and runs the full pipeline over it.

use diagram::{traverse, BatchTraverser, DiagramConfig, RecognizeOptions};
use indoc::indoc;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("file has a parent")).expect("Failed to create dir");
    fs::write(path, body).expect("Failed to write source");
}

/// Creates a small project: 4 eligible sources, one without declarations,
/// plus generated and build-output files that must never be scanned
fn create_test_project() -> tempfile::TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    let root = dir.path();

    write(
        root,
        "Animal.cs",
        indoc! {r#"
            [Obsolete]
            public abstract class Animal : IComparable, Base
            {
            }
        "#},
    );
    write(
        root,
        "Program.cs",
        indoc! {"
            // top-level statements only
            Console.WriteLine(1);
        "},
    );
    write(
        root,
        "Models/Dog.cs",
        indoc! {"
            namespace Zoo.Models
            {
                public sealed class Dog : Animal
                {
                }
            }
        "},
    );
    write(
        root,
        "Models/IRepository.cs",
        "public interface IRepository<T> : IDisposable\n{\n}\n",
    );
    write(root, "Models/Dog.g.cs", "public partial class Dog {}");
    write(root, "obj/Debug/AssemblyInfo.cs", "public class AssemblyInfo {}");
    write(root, "Models/obj/Stale.cs", "public class Stale {}");
    write(root, "README.md", "public class NotCode {}");

    dir
}

#[test]
fn test_full_tree_in_walk_order() {
    let project = create_test_project();
    let result = traverse(project.path(), 10, true, true).expect("traversal succeeds");

    let files: Vec<_> = result.files.iter().map(|f| f.relative_path.as_str()).collect();
    assert_eq!(files, vec!["Animal.cs", "Models/Dog.cs", "Models/IRepository.cs"]);
    assert_eq!(result.processed, 3);
    assert_eq!(result.total_scanned, 4);
    assert!(!result.truncated);
}

#[test]
fn test_rendered_scenario_diagram() {
    let project = create_test_project();
    let response = traverse(project.path(), 10, true, true)
        .expect("traversal succeeds")
        .to_response();

    assert_eq!(
        response.content[0].mermaid,
        indoc! {r#"
            classDiagram
            %% File: Animal.cs
            class Animal
            class Animal { <<abstract>> }
            IComparable <|-- Animal
            Base <|-- Animal
            note for Animal "Obsolete""#}
    );
    assert_eq!(
        response.content[2].mermaid,
        "classDiagram\n%% File: IRepository.cs\nclass IRepository~T~\nIDisposable <|-- IRepository~T~"
    );
}

#[test]
fn test_abstract_markers_can_be_disabled() {
    let project = create_test_project();
    let result = BatchTraverser::new()
        .with_options(RecognizeOptions {
            include_interfaces: true,
            include_abstracts: false,
        })
        .traverse(project.path())
        .expect("traversal succeeds");

    let animal = &result.files[0];
    assert!(animal
        .statements
        .iter()
        .all(|s| !s.to_string().contains("<<abstract>>")));
}

#[test]
fn test_truncation_at_cap() {
    let project = create_test_project();
    let result = traverse(project.path(), 2, true, true).expect("traversal succeeds");

    assert_eq!(result.processed, 2);
    assert!(result.truncated);
    assert!(result.total_scanned >= 2);
    let files: Vec<_> = result.files.iter().map(|f| f.relative_path.as_str()).collect();
    assert_eq!(files, vec!["Animal.cs", "Models/Dog.cs"]);
}

#[test]
fn test_identical_inputs_identical_results() {
    let project = create_test_project();
    let first = traverse(project.path(), 10, true, true).expect("traversal succeeds");
    let second = traverse(project.path(), 10, true, true).expect("traversal succeeds");
    assert_eq!(first, second);
}

#[test]
fn test_empty_tree() {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::create_dir_all(dir.path().join("empty/nested")).expect("Failed to create dir");

    let result = traverse(dir.path(), 10, true, true).expect("traversal succeeds");
    assert_eq!(result.processed, 0);
    assert!(!result.truncated);
    assert_eq!(result.total_scanned, 0);
    assert!(result.files.is_empty());
}

#[test]
fn test_response_json_shape() {
    let project = create_test_project();
    let response = DiagramConfig {
        root: project.path().to_string_lossy().into_owned(),
        max_files: 1,
        ..DiagramConfig::default()
    }
    .traverser()
    .traverse(project.path())
    .expect("traversal succeeds")
    .to_response();

    let json = serde_json::to_value(&response).expect("serializable");
    assert_eq!(json["processed"], 1);
    assert_eq!(json["truncated"], true);
    assert_eq!(json["content"][0]["file"], "Animal.cs");
    assert!(json["total_scanned"].as_u64().expect("number") >= 1);
}
