#![no_main]

use std::path::{Component, Path};

use libfuzzer_sys::fuzz_target;
use shipit::domain::value_objects::{ArtifactName, DEFAULT_NAME_TEMPLATE};

fuzz_target!(|data: (&str, &str)| {
    let (repo, branch) = data;
    if let Ok(name) = ArtifactName::render(DEFAULT_NAME_TEMPLATE, repo, branch) {
        // A rendered name is always a single path component under the temp dir
        let path = name.path_in(Path::new("/tmp"));
        assert_eq!(path.parent(), Some(Path::new("/tmp")));
        assert!(matches!(
            Path::new(name.as_str()).components().collect::<Vec<_>>()[..],
            [Component::Normal(_)]
        ));
    }
});
