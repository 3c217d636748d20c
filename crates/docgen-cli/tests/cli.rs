//! Render and check handlers against configuration and data files on disk.

use std::path::{Path, PathBuf};

use docgen_cli::check::{check, CheckArgs};
use docgen_cli::render::{render, run_render, RenderArgs};

const INVOICE_CONFIG: &str = r#"
root_node: invoice
batch_root_node: invoices
indent: 2
schema:
  "@number": "/^INV-[0-9]+$/"
  status: "draft|final"
  "?note": ""
  ":lines:line":
    "@sku": ""
    qty: "/^[0-9]+$/"
"#;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn render_args(config: PathBuf, data: PathBuf) -> RenderArgs {
    RenderArgs {
        config,
        data,
        batch: false,
        indent: None,
        out: None,
    }
}

#[test]
fn render_single_document() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "invoice.yaml", INVOICE_CONFIG);
    let data = write(
        dir.path(),
        "invoice.json",
        r#"{"number": "INV-1", "status": "paid", "lines": [{"sku": "A", "qty": 3}]}"#,
    );

    let xml = render(&render_args(config, data)).unwrap();
    let expected = "\
<invoice number=\"INV-1\">
  <status>draft</status>
  <lines>
    <line sku=\"A\">
      <qty>3</qty>
    </line>
  </lines>
</invoice>";
    assert_eq!(xml, expected);
}

#[test]
fn render_batch_with_indent_override() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "invoice.yaml", INVOICE_CONFIG);
    let data = write(
        dir.path(),
        "invoices.yaml",
        "- number: INV-1\n  status: final\n- number: INV-2\n  status: draft\n  note: rush\n",
    );

    let mut args = render_args(config, data);
    args.batch = true;
    args.indent = Some(0);

    let xml = render(&args).unwrap();
    assert_eq!(
        xml,
        "<invoices>\
<invoice number=\"INV-1\"><status>final</status><lines/></invoice>\
<invoice number=\"INV-2\"><status>draft</status><note>rush</note><lines/></invoice>\
</invoices>"
    );
}

#[test]
fn render_batch_requires_list_data() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "invoice.yaml", INVOICE_CONFIG);
    let data = write(dir.path(), "one.json", r#"{"number": "INV-1"}"#);

    let mut args = render_args(config, data);
    args.batch = true;
    let err = render(&args).unwrap_err();
    assert!(format!("{err:#}").contains("list of records"));
}

#[test]
fn render_reports_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "invoice.yaml", INVOICE_CONFIG);
    let data = write(dir.path(), "bad.json", r#"{"number": "7"}"#);

    let err = render(&render_args(config, data)).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("invalid value 7 for key @number"), "got: {chain}");
}

#[test]
fn run_render_writes_out_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "invoice.yaml", INVOICE_CONFIG);
    let data = write(dir.path(), "invoice.json", r#"{"number": "INV-9", "status": "final"}"#);
    let out = dir.path().join("out.xml");

    let mut args = render_args(config, data);
    args.out = Some(out.clone());
    assert_eq!(run_render(&args).unwrap(), 0);

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("<invoice number=\"INV-9\">"));
    assert!(written.ends_with("</invoice>\n"));
}

#[test]
fn check_summarizes_schema() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "invoice.yaml", INVOICE_CONFIG);

    let report = check(&CheckArgs { config }).unwrap();
    assert!(report.starts_with("schema OK"));
    assert!(report.contains("root:         invoice"));
    assert!(report.contains("batch root:   invoices"));
    assert!(report.contains("elements:     3"));
    assert!(report.contains("attributes:   2"));
    assert!(report.contains("record lists: 1"));
    assert!(report.contains("optional:     1"));
    assert!(report.contains("depth:        2"));
}

#[test]
fn check_rejects_malformed_record_list_key() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(
        dir.path(),
        "bad.yaml",
        "root_node: doc\nschema:\n  \":onlyone\":\n    x: \"\"\n",
    );

    let err = check(&CheckArgs { config }).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("must contain 2 non-empty parts"), "got: {chain}");
}

#[test]
fn check_rejects_non_string_leaf() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(
        dir.path(),
        "bad.json",
        r#"{"root_node": "doc", "schema": {"count": 5}}"#,
    );

    let err = check(&CheckArgs { config }).unwrap_err();
    assert!(format!("{err:#}").contains("expects string rule or nested schema for count"));
}
