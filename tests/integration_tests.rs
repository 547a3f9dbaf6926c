use course_data_generator::{
    Config, ConfigBuilder, CourseDocument, CourseGenerator, ExtensionTable, LessonType,
    ScanError,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const BUCKET: &str = "https://storage.googleapis.com/python-course-bucket/";

fn write_files(dir: &Path, files: &[(&str, &str)]) {
    fs::create_dir_all(dir).unwrap();
    for (name, contents) in files {
        fs::write(dir.join(name), contents).unwrap();
    }
}

fn sample_course() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write_files(
        &root.join("1. Getting Started"),
        &[
            ("1. Welcome.mp4", "video"),
            ("1. Welcome English.vtt", "WEBVTT"),
            ("2. Course Outline.html", "<h2>Outline</h2>"),
            ("2. Course Outline.pdf", "%PDF"),
            ("cover.jpg", "jpg"),
        ],
    );
    write_files(
        &root.join("10. Wrap Up"),
        &[("1. Goodbye.mkv", "video"), ("1. Goodbye.srt", "1")],
    );
    write_files(
        &root.join("2. Basics"),
        &[
            ("0 exercises.zip", "zip"),
            ("0 solutions.zip", "zip"),
            ("3. Variables.mp4", "video"),
            ("10. Functions.mp4", "video"),
            ("3. Variables.pdf", "%PDF"),
        ],
    );
    write_files(&root.join("3. Extras"), &[("readme.ini", "[x]")]);
    write_files(&root.join(".hidden"), &[("secret.mp4", "video")]);

    temp_dir
}

fn generate(root: &Path) -> CourseDocument {
    let generator = CourseGenerator::new(Config::default(), BUCKET).unwrap();
    generator.run(root, false).unwrap().document
}

#[test]
fn test_full_course_document() {
    let course = sample_course();
    let document = generate(course.path());

    let titles: Vec<&str> = document.chapters().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["1. Getting Started", "2. Basics", "10. Wrap Up"]);

    let intro = &document.chapters()[0];
    assert_eq!(intro.lessons.len(), 2);

    let welcome = &intro.lessons[0];
    assert_eq!(welcome.title, "1. Welcome");
    assert_eq!(welcome.kind, LessonType::Video);
    assert_eq!(
        welcome.url.as_deref(),
        Some("https://storage.googleapis.com/python-course-bucket/1.%20Getting%20Started/1.%20Welcome.mp4")
    );
    assert_eq!(
        welcome.subtitle.as_deref(),
        Some("https://storage.googleapis.com/python-course-bucket/1.%20Getting%20Started/1.%20Welcome%20English.vtt")
    );

    let outline = &intro.lessons[1];
    assert_eq!(outline.kind, LessonType::Text);
    assert_eq!(outline.content.as_deref(), Some("<h2>Outline</h2>"));
    assert_eq!(outline.resources.len(), 1);
    assert_eq!(outline.resources[0].title, "2. Course Outline.pdf");

    let basics = &document.chapters()[1];
    let basic_titles: Vec<&str> = basics.lessons.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(basic_titles, vec!["Resources", "3. Variables", "10. Functions"]);
    assert_eq!(basics.lessons[0].resources.len(), 2);
    assert_eq!(basics.lessons[1].resources[0].title, "3. Variables.pdf");
    assert!(basics.lessons[2].resources.is_empty());

    let wrap_up = &document.chapters()[2];
    assert!(wrap_up.lessons[0].subtitle.as_deref().unwrap().ends_with("/1.%20Goodbye.srt"));
}

#[test]
fn test_summary_counts() {
    let course = sample_course();
    let generator = CourseGenerator::new(Config::default(), BUCKET).unwrap();
    let summary = generator.run(course.path(), false).unwrap().summary;

    assert_eq!(summary.chapters, 3);
    assert_eq!(summary.lessons, 6);
    assert_eq!(summary.videos, 4);
    assert_eq!(summary.texts, 2);
    assert_eq!(summary.resources, 4);
    assert_eq!(summary.subtitled_videos, 2);
}

#[test]
fn test_subtitle_never_becomes_a_lesson() {
    let temp_dir = TempDir::new().unwrap();
    write_files(
        &temp_dir.path().join("Ch"),
        &[("Intro.mp4", "v"), ("Intro English.vtt", "WEBVTT")],
    );

    let document = generate(temp_dir.path());
    let lessons: Vec<_> = document.lessons().collect();
    assert_eq!(lessons.len(), 1);
    assert!(lessons.iter().all(|l| l.filename.as_deref() != Some("Intro English.vtt")));
}

#[test]
fn test_unclassified_chapter_is_excluded() {
    let temp_dir = TempDir::new().unwrap();
    write_files(&temp_dir.path().join("Empty"), &[("readme.ini", "x")]);
    write_files(&temp_dir.path().join("Full"), &[("a.mp4", "x")]);

    let document = generate(temp_dir.path());
    assert_eq!(document.chapters().len(), 1);
    assert_eq!(document.chapters()[0].title, "Full");
}

#[test]
fn test_root_files_form_single_chapter() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("Houdini FX");
    write_files(&root, &[("01 Intro.mp4", "v"), ("02 Notes.md", "# Notes")]);

    let document = generate(&root);
    assert_eq!(document.chapters().len(), 1);
    assert_eq!(document.chapters()[0].title, "Houdini FX");
    assert_eq!(
        document.chapters()[0].lessons[0].url.as_deref(),
        Some("https://storage.googleapis.com/python-course-bucket/Houdini%20FX/01%20Intro.mp4")
    );
}

#[test]
fn test_output_is_byte_identical_across_runs() {
    let course = sample_course();
    let output = course.path().join("course_data.json");

    generate(course.path());
    let first = fs::read(&output).unwrap();

    generate(course.path());
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_rerun_in_flat_course_ignores_previous_output() {
    let temp_dir = TempDir::new().unwrap();
    write_files(temp_dir.path(), &[("Intro.mp4", "v")]);

    let first = generate(temp_dir.path());
    let second = generate(temp_dir.path());
    assert_eq!(first, second);
    assert_eq!(second.lessons().count(), 1);
}

#[test]
fn test_written_document_round_trips() {
    let course = sample_course();
    let document = generate(course.path());

    let written = fs::read_to_string(course.path().join("course_data.json")).unwrap();
    assert_eq!(CourseDocument::from_json(&written).unwrap(), document);
    assert!(written.contains("\"subtitle\": null"));
}

#[test]
fn test_missing_course_path_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    let generator = CourseGenerator::new(Config::default(), BUCKET).unwrap();
    let err = generator.run(&missing, false).unwrap_err();

    assert!(matches!(err.downcast_ref::<ScanError>(), Some(ScanError::NotFound(_))));
    assert!(fs::read_dir(temp_dir.path()).unwrap().next().is_none());
}

#[test]
fn test_custom_resources_lesson() {
    let temp_dir = TempDir::new().unwrap();
    write_files(&temp_dir.path().join("Ch"), &[("slides.pdf", "%PDF")]);

    let config = ConfigBuilder::new()
        .with_resources_lesson("Downloads", "<p>Grab these files:</p>")
        .build();
    let generator = CourseGenerator::new(config, BUCKET).unwrap();
    let document = generator.run(temp_dir.path(), true).unwrap().document;

    let lesson = &document.chapters()[0].lessons[0];
    assert_eq!(lesson.title, "Downloads");
    assert_eq!(lesson.content.as_deref(), Some("<p>Grab these files:</p>"));
}

#[cfg(unix)]
#[test]
fn test_symlinked_chapter_is_followed() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    write_files(&source, &[("a.mp4", "v")]);

    let course = temp_dir.path().join("course");
    fs::create_dir(&course).unwrap();
    std::os::unix::fs::symlink(&source, course.join("Linked Chapter")).unwrap();

    let document = generate(&course);
    assert_eq!(document.chapters()[0].title, "Linked Chapter");
}

#[cfg(unix)]
#[test]
fn test_symlinked_flat_course_keeps_given_name() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("a1b2c3");
    write_files(&target, &[("Intro.mp4", "v")]);

    let link = temp_dir.path().join("Python Masterclass");
    std::os::unix::fs::symlink(&target, &link).unwrap();

    let generator = CourseGenerator::new(Config::default(), "https://x.test/b").unwrap();
    let report = generator.run(&link, false).unwrap();

    let chapter = &report.document.chapters()[0];
    assert_eq!(chapter.title, "Python Masterclass");
    assert_eq!(
        chapter.lessons[0].url.as_deref(),
        Some("https://x.test/b/Python%20Masterclass/Intro.mp4")
    );
    assert!(target.join("course_data.json").exists());
}

#[test]
fn test_custom_extension_table() {
    let temp_dir = TempDir::new().unwrap();
    write_files(
        &temp_dir.path().join("Ch"),
        &[
            ("1 Intro.m4v", "v"),
            ("2 Notes.rst", "Notes"),
            ("3 Lab.tar", "t"),
            ("4 Old.mp4", "v"),
        ],
    );

    let extensions = ExtensionTable {
        video: vec!["m4v".to_string()],
        text: vec!["rst".to_string()],
        subtitle: vec!["vtt".to_string()],
        resource: vec!["tar".to_string()],
    };
    let config = ConfigBuilder::new().with_extensions(extensions).build();
    let generator = CourseGenerator::new(config, BUCKET).unwrap();
    let document = generator.run(temp_dir.path(), true).unwrap().document;

    let lessons: Vec<_> = document.lessons().collect();
    assert_eq!(lessons.len(), 2);
    assert_eq!(lessons[0].kind, LessonType::Video);
    assert_eq!(lessons[1].kind, LessonType::Text);
    assert_eq!(lessons[1].content.as_deref(), Some("Notes"));
    assert_eq!(lessons[1].resources[0].kind, "tar");
}
