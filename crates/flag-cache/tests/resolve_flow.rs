use flagword_flag_cache::{
    archive_versions, FlagCache, FlagCacheError, OPERATOR_PREAMBLE,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Writes `<stem>.html` listing the given flags plus a `<stem>_files` bundle
/// holding one image per flag whose content is `image-<index>`.
fn save_page(dir: &Path, stem: &str, flags: &[u32]) {
    let bundle = dir.join(format!("{stem}_files"));
    fs::create_dir_all(&bundle).unwrap();

    let mut html = String::from("<html><body><ul>\n");
    for index in flags {
        let image = format!("Flag_{index}.png");
        fs::write(bundle.join(&image), format!("image-{index}")).unwrap();
        html.push_str(&format!(
            "<li>flag{index} <span class=\"flagicon\"><img alt=\"\" src=\"./{stem}_files/{image}\" width=\"300\"></span></li>\n"
        ));
    }
    html.push_str("</ul></body></html>\n");
    fs::write(dir.join(format!("{stem}.html")), html).unwrap();
}

fn output_text(cache: FlagCache<Vec<u8>>) -> String {
    String::from_utf8(cache.into_output()).unwrap()
}

#[test]
fn cached_flag_never_scrapes() {
    let temp = tempdir().unwrap();
    let dir = temp.path();
    fs::write(dir.join("flag1.png"), "cached").unwrap();
    save_page(dir, "User", &[1]);

    let mut cache = FlagCache::with_output(dir, Vec::new());
    let first = cache.resolve("Alphaland", 1).unwrap();
    let second = cache.resolve("Alphaland", 1).unwrap();

    assert_eq!(first, dir.join("flag1.png"));
    assert_eq!(first, second);
    assert!(cache.is_complete());
    assert!(cache.scrapes().is_empty());
    assert!(dir.join("User.html").exists(), "page must stay unarchived");
    assert_eq!(fs::read_to_string(&first).unwrap(), "cached");
    assert!(archive_versions(dir).unwrap().is_empty());
    assert_eq!(output_text(cache), "");
}

#[test]
fn miss_is_filled_from_saved_page_and_page_is_archived() {
    let temp = tempdir().unwrap();
    let dir = temp.path();
    save_page(dir, "User", &[5, 6]);

    let mut cache = FlagCache::with_output(dir, Vec::new());
    let five = cache.resolve("Epsilonia", 5).unwrap();
    let six = cache.resolve("Zetaland", 6).unwrap();

    assert_eq!(fs::read_to_string(&five).unwrap(), "image-5");
    assert_eq!(fs::read_to_string(&six).unwrap(), "image-6");
    assert!(cache.is_complete());

    // Flag 6 came from the same pass as flag 5.
    assert_eq!(cache.scrapes().len(), 1);
    assert_eq!(cache.scrapes()[0].flags_copied, vec![5, 6]);

    assert!(!dir.join("User.html").exists());
    assert!(!dir.join("User_files").exists());
    let version1 = dir.join("archive").join("version1");
    assert!(version1.join("User.html").is_file());
    assert!(version1.join("User_files").join("Flag_5.png").is_file());
    assert_eq!(output_text(cache), "");
}

#[test]
fn genuine_miss_prints_preamble_once_then_one_line_per_flag() {
    let temp = tempdir().unwrap();
    let dir = temp.path();
    fs::write(dir.join("flag1.png"), "cached").unwrap();

    let mut cache = FlagCache::with_output(dir, Vec::new());
    cache.resolve("Alphaland", 1).unwrap();
    let path = cache.resolve("Epsilonia", 5).unwrap();
    cache.resolve("Zetaland", 6).unwrap();

    assert_eq!(path, dir.join("flag5.png"));
    assert!(!path.exists());
    assert!(!cache.is_complete());
    let missing: Vec<_> = cache.missing().iter().map(|m| m.index).collect();
    assert_eq!(missing, vec![5, 6]);

    let expected = format!(
        "{OPERATOR_PREAMBLE}\n\
         * flag5 {{{{flagicon|Epsilonia|size=300px}}}}\n\
         * flag6 {{{{flagicon|Zetaland|size=300px}}}}\n"
    );
    assert_eq!(output_text(cache), expected);
}

#[test]
fn single_miss_scenario() {
    let temp = tempdir().unwrap();
    let mut cache = FlagCache::with_output(temp.path(), Vec::new());

    cache.resolve("Epsilonia", 5).unwrap();

    assert!(!cache.is_complete());
    let text = output_text(cache);
    assert_eq!(text.matches("To fetch missing flags:").count(), 1);
    assert_eq!(text.matches("* flag5 ").count(), 1);
}

#[test]
fn archive_versions_stay_dense_across_runs() {
    let temp = tempdir().unwrap();
    let dir = temp.path();

    save_page(dir, "first", &[1]);
    save_page(dir, "second", &[2]);
    let mut run1 = FlagCache::with_output(dir, Vec::new());
    run1.resolve("Alphaland", 1).unwrap();
    assert_eq!(archive_versions(dir).unwrap(), vec![1, 2]);

    save_page(dir, "third", &[3]);
    let mut run2 = FlagCache::with_output(dir, Vec::new());
    run2.resolve("Alphaland", 1).unwrap();
    run2.resolve("Betaland", 2).unwrap();
    run2.resolve("Gammaland", 3).unwrap();
    // Still missing: scrape finds nothing new and archives nothing.
    run2.resolve("Deltaland", 4).unwrap();

    assert_eq!(archive_versions(dir).unwrap(), vec![1, 2, 3]);
    assert!(dir.join("archive/version3/third.html").is_file());
    assert!(!run2.is_complete());
}

#[test]
fn same_page_name_saved_twice_gets_a_new_version() {
    let temp = tempdir().unwrap();
    let dir = temp.path();

    save_page(dir, "User", &[1]);
    FlagCache::with_output(dir, Vec::new())
        .resolve("Alphaland", 1)
        .unwrap();

    save_page(dir, "User", &[2]);
    FlagCache::with_output(dir, Vec::new())
        .resolve("Betaland", 2)
        .unwrap();

    assert_eq!(archive_versions(dir).unwrap(), vec![1, 2]);
    assert!(dir.join("archive/version2/User_files/Flag_2.png").is_file());
}

#[test]
fn page_without_bundle_is_fatal_and_leaves_no_archive_entry() {
    let temp = tempdir().unwrap();
    let dir = temp.path();
    fs::write(dir.join("User.html"), "flag1 <img src=\"./User_files/a.png\">").unwrap();

    let mut cache = FlagCache::with_output(dir, Vec::new());
    let err = cache.resolve("Alphaland", 1).unwrap_err();

    assert!(matches!(err, FlagCacheError::MissingBundle { .. }), "{err}");
    assert!(dir.join("User.html").exists());
    assert!(archive_versions(dir).unwrap().is_empty());
    assert!(!dir.join("flag1.png").exists());
}

#[test]
fn reference_to_missing_image_is_fatal() {
    let temp = tempdir().unwrap();
    let dir = temp.path();
    fs::create_dir_all(dir.join("User_files")).unwrap();
    fs::write(dir.join("User.html"), "flag1 <img src=\"./User_files/gone.png\">").unwrap();

    let mut cache = FlagCache::with_output(dir, Vec::new());
    let err = cache.resolve("Alphaland", 1).unwrap_err();

    assert!(matches!(err, FlagCacheError::CopyFailed { .. }), "{err}");
    assert!(dir.join("User.html").exists());
}

#[test]
fn escaped_reference_is_decoded_before_copy() {
    let temp = tempdir().unwrap();
    let dir = temp.path();
    let bundle = dir.join("Trinidad & Tobago_files");
    fs::create_dir_all(&bundle).unwrap();
    fs::write(bundle.join("flag.png"), "tt").unwrap();
    fs::write(
        dir.join("Trinidad & Tobago.html"),
        "<p>flag9 <img src=\"./Trinidad &amp; Tobago_files/flag.png\" /></p>",
    )
    .unwrap();

    let mut cache = FlagCache::with_output(dir, Vec::new());
    let path = cache.resolve("Trinidad and Tobago", 9).unwrap();

    assert_eq!(fs::read_to_string(path).unwrap(), "tt");
}
