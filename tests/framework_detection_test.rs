mod support;

use pagepath::{classify, FrameworkKind, RealFileSystem, ResolveError};
use support::Project;
use yare::parameterized;

#[parameterized(
    sapper = { &["sapper"], &[], FrameworkKind::Sapper },
    nuxt = { &["nuxt"], &[], FrameworkKind::NuxtJs },
    sveltekit_dev = { &[], &["@sveltejs/kit"], FrameworkKind::SvelteKit },
    next = { &["next", "react"], &[], FrameworkKind::NextJs },
    nothing = { &[], &[], FrameworkKind::NextJs },
    sapper_over_nuxt = { &["nuxt"], &["sapper"], FrameworkKind::Sapper },
    nuxt_over_sveltekit = { &["@sveltejs/kit"], &["nuxt"], FrameworkKind::NuxtJs },
    sveltekit_over_next = { &["next", "@sveltejs/kit"], &[], FrameworkKind::SvelteKit },
)]
fn test_classification(deps: &[&str], dev_deps: &[&str], expected: FrameworkKind) {
    let project = Project::with_dependencies(deps, dev_deps);

    let kind = classify(&RealFileSystem::new(), project.path()).unwrap();
    assert_eq!(kind, expected);
}

#[test]
fn test_missing_manifest() {
    let project = Project::new();

    let err = classify(&RealFileSystem::new(), project.path()).unwrap_err();
    match err {
        ResolveError::ManifestRead { path, .. } => assert_eq!(path, project.join("package.json")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_malformed_manifest() {
    let project = Project::new();
    project.write("package.json", "{ \"dependencies\": { \"nuxt\": ");

    assert!(matches!(
        classify(&RealFileSystem::new(), project.path()),
        Err(ResolveError::ManifestRead { .. })
    ));
}

#[parameterized(
    array_of_strings = { "[\"nuxt\"]" },
    empty_array = { "[]" },
    string = { "\"nuxt\"" },
    null = { "null" },
)]
fn test_manifest_must_be_an_object(content: &str) {
    let project = Project::new();
    project.write("package.json", content);

    let err = classify(&RealFileSystem::new(), project.path()).unwrap_err();
    assert!(matches!(err, ResolveError::ManifestRead { .. }));
    assert!(err.to_string().contains("manifest is not a JSON object"), "{err}");
}

#[test]
fn test_null_section_is_empty() {
    let project = Project::new();
    project.write(
        "package.json",
        r#"{ "dependencies": { "nuxt": "2.15" }, "devDependencies": null }"#,
    );

    let kind = classify(&RealFileSystem::new(), project.path()).unwrap();
    assert_eq!(kind, FrameworkKind::NuxtJs);
}
