//! Round-trip and wire-format tests for the paper payload.

use paperforge::{JsonFormat, Paper, SectionField, Target};

fn sample_paper() -> Paper {
    let mut paper = Paper::new();
    paper.title = "A Study of Things".to_string();
    paper.authors = vec!["A. Author".to_string(), "B. Author".to_string()];
    paper.affiliations = vec!["Example University".to_string()];
    paper.emails = vec!["a@example.edu".to_string()];
    paper.abstract_text = "We study things carefully.".to_string();
    paper.keywords = vec!["things".to_string(), "study".to_string()];
    paper.references = vec![
        "[1] J. Smith, \"Article,\" Journal, vol. 1, 2023.".to_string(),
    ];
    paper.appendix = vec!["Supplementary proofs.".to_string()];

    // First section: a subsection carrying one of everything.
    paper.add_section();
    paper
        .update_section(0, SectionField::Heading, "Introduction")
        .unwrap();
    paper.add_subsection(0).unwrap();
    let sub = Target::Subsection(0, 0);
    paper.add_formula(sub).unwrap();
    paper.update_formula(sub, 0, "a^2 + b^2 = c^2").unwrap();
    paper.add_table(sub, 2, 2).unwrap();
    paper.update_table_cell(sub, 0, 0, 0, "header").unwrap();
    paper.add_image(sub, "uploads/fig1.png", "Figure 1").unwrap();

    // Second section: untouched beyond its heading.
    paper.add_section();
    paper
        .update_section(1, SectionField::Heading, "Conclusion")
        .unwrap();

    paper
}

#[test]
fn test_round_trip_reproduces_equal_tree() {
    let paper = sample_paper();

    let json = paper.to_json(JsonFormat::Pretty).unwrap();
    let restored = Paper::from_json(&json).unwrap();

    assert_eq!(restored, paper);
    // Untouched optional fields come back as empty strings, not nulls.
    assert_eq!(restored.sections[1].body.content, "");
    assert_eq!(restored.sections[0].subsections[0].images[0].caption, "Figure 1");
}

#[test]
fn test_compact_round_trip() {
    let paper = sample_paper();
    let json = paper.to_json(JsonFormat::Compact).unwrap();
    assert!(!json.contains('\n'));
    assert_eq!(Paper::from_json(&json).unwrap(), paper);
}

#[test]
fn test_wire_field_names() {
    let paper = sample_paper();
    let value: serde_json::Value = serde_json::from_str(&paper.to_json(JsonFormat::Compact).unwrap()).unwrap();

    for field in [
        "title",
        "authors",
        "affiliations",
        "emails",
        "abstract",
        "keywords",
        "sections",
        "references",
        "appendix",
    ] {
        assert!(value.get(field).is_some(), "missing root field {field}");
    }

    let section = &value["sections"][0];
    for field in ["heading", "content", "images", "formulas", "tables", "subsections"] {
        assert!(section.get(field).is_some(), "missing section field {field}");
    }

    let subsection = &section["subsections"][0];
    assert!(subsection.get("subsections").is_none());

    // Tables serialize as bare nested string lists.
    assert_eq!(subsection["tables"][0][0][0], "header");
    assert_eq!(subsection["tables"][0][1][1], "");

    // Images serialize as {path, caption}.
    assert_eq!(subsection["images"][0]["path"], "uploads/fig1.png");
    assert_eq!(subsection["images"][0]["caption"], "Figure 1");
}

#[test]
fn test_deserializing_ragged_table_fails() {
    let json = r#"{
        "title": "T",
        "sections": [{
            "heading": "", "content": "", "images": [], "formulas": [],
            "tables": [[["a", "b"], ["c"]]],
            "subsections": []
        }]
    }"#;
    assert!(Paper::from_json(json).is_err());
}

#[test]
fn test_missing_fields_default_to_empty() {
    let paper = Paper::from_json(r#"{"title": "Only a title"}"#).unwrap();
    assert_eq!(paper.title, "Only a title");
    assert!(paper.authors.is_empty());
    assert!(paper.sections.is_empty());
    assert_eq!(paper.abstract_text, "");
}
