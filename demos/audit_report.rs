use formdoc::{AnswerMap, FormsCatalog, build_report};
use serde_json::json;
use std::env;
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "formdoc=debug");
        }
    }
    env_logger::init();

    println!("Running audit report example...");

    // The same catalog shape the form backend serves.
    let catalog: FormsCatalog = serde_json::from_value(json!({
        "schemaVersion": "1.0",
        "forms": [{
            "id": "IA-204",
            "title": "Internal Audit Readiness Review",
            "source": { "name": "Internal Audit Programme", "type": "compliance", "evidence": "" },
            "complexityLevel": 2,
            "sections": [
                {
                    "id": "scope", "title": "Scope & Planning",
                    "fields": [
                        { "id": "site", "label": "Audited site", "type": "text", "required": true },
                        { "id": "onSite", "label": "Was the visit conducted on site?", "type": "boolean" },
                        { "id": "standards", "label": "Standards covered", "type": "multiText" },
                        { "id": "auditDate", "label": "Audit date", "type": "date" }
                    ]
                },
                {
                    "id": "execution", "title": "Execution",
                    "fields": [
                        {
                            "id": "interviews", "label": "People interviewed", "type": "table",
                            "columns": [
                                { "id": "who", "label": "Who", "type": "text" },
                                { "id": "role", "label": "Role", "type": "text" },
                                { "id": "topics", "label": "Topics", "type": "multiText" }
                            ]
                        },
                        {
                            "id": "docControl", "label": "Document control finding", "type": "auditFinding",
                            "findingOptions": ["CONFORMS", "MINOR_NC", "MAJOR_NC", "OFI"],
                            "evidence": { "required": true }
                        }
                    ]
                },
                {
                    "id": "closing", "title": "Closing",
                    "fields": [
                        {
                            "id": "lead", "label": "Audit lead contact", "type": "object",
                            "properties": {
                                "firstName": { "id": "firstName", "label": "First name", "type": "text" },
                                "lastName": { "id": "lastName", "label": "Last name", "type": "text" },
                                "phoneNumber": { "id": "phoneNumber", "label": "Phone", "type": "tel" }
                            }
                        },
                        { "id": "summary", "label": "Closing summary", "type": "textarea" }
                    ]
                }
            ]
        }]
    }))?;

    let schema = catalog.form("IA-204").expect("demo form present");
    println!("✓ Loaded form '{}' ({} questions)", schema.title, schema.field_count());

    let answers: AnswerMap = serde_json::from_value(json!({
        "site": "Plant 7, Rotterdam",
        "onSite": true,
        "standards": ["ISO 9001", "  ISO 14001 ", ""],
        "auditDate": "2026-03-12",
        "interviews": [
            { "who": "Ana Lindqvist", "role": "QA Manager", "topics": ["document control", "CAPA"] },
            { "who": "Ben Osei", "role": "Line Supervisor", "topics": ["work instructions"] }
        ],
        "docControl": {
            "finding": "MINOR_NC",
            "evidenceText": "Two obsolete work instructions found at station 4."
        },
        "lead": { "firstName": "Jo", "lastName": "Verhoeven" }
    }))?;

    let bytes = build_report(schema, &answers)?;
    println!("✓ Report built ({} bytes)", bytes.len());

    // The filename convention is the caller's job, not the renderer's.
    let output_path = format!("{}.pdf", schema.id);
    fs::write(&output_path, bytes)?;
    println!("\nSuccess! Generated {}", output_path);
    Ok(())
}
