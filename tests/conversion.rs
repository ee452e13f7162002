use std::fs;
use std::path::Path;

use rust_xlsxwriter::Workbook;
use sheet2sql::ToolError;
use sheet2sql::convert;
use sheet2sql::io::excel_read;
use sheet2sql::model::TableName;
use tempfile::tempdir;

fn write_people_workbook(path: &Path) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("People").expect("sheet named");
    worksheet.write_string(0, 0, "First Name").expect("header written");
    worksheet.write_string(0, 1, "Age").expect("header written");
    worksheet.write_string(1, 0, "O'Brien").expect("cell written");
    worksheet.write_string(1, 1, "30").expect("cell written");
    worksheet.write_string(2, 0, "Jane").expect("cell written");
    worksheet.write_string(2, 1, "25").expect("cell written");
    workbook.save(path).expect("workbook saved");
}

#[test]
fn workbook_converts_to_expected_script() {
    let dir = tempdir().expect("temp dir created");
    let input = dir.path().join("people.xlsx");
    write_people_workbook(&input);

    let output = dir.path().join("people_output.sql");
    convert::excel_to_sql(&input, &output, &TableName::new("people"), None)
        .expect("conversion succeeded");

    let sql = fs::read_to_string(&output).expect("script read");
    let expected = concat!(
        "CREATE TABLE people (\n",
        "    [First_Name] varchar(255),\n",
        "    [Age] varchar(255)\n",
        ");\n",
        "\n",
        "-- SELECT * FROM people;\n",
        "-- DROP TABLE people;\n",
        "\n",
        "INSERT INTO people (\n",
        "   [First_Name],\n",
        "   [Age]\n",
        ") VALUES\n",
        "('O''Brien','30'),\n",
        "('Jane','25');\n",
    );
    assert_eq!(sql, expected);
}

#[test]
fn dataset_keeps_raw_headers_and_cell_text() {
    let dir = tempdir().expect("temp dir created");
    let input = dir.path().join("people.xlsx");
    write_people_workbook(&input);

    let dataset = excel_read::read_dataset(&input, None).expect("dataset read");
    assert_eq!(
        dataset.columns(),
        vec!["First Name".to_string(), "Age".to_string()]
    );
    assert_eq!(
        dataset.rows(),
        vec![
            vec!["O'Brien".to_string(), "30".to_string()],
            vec!["Jane".to_string(), "25".to_string()],
        ]
    );
}

#[test]
fn cells_read_as_text_without_coercion() {
    let dir = tempdir().expect("temp dir created");
    let input = dir.path().join("scores.xlsx");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "name").expect("header written");
    worksheet.write_string(0, 1, "score").expect("header written");
    worksheet.write_string(0, 2, "note").expect("header written");
    worksheet.write_string(1, 0, "alpha").expect("cell written");
    worksheet.write_number(1, 1, 30.0).expect("cell written");
    worksheet.write_string(2, 0, "beta").expect("cell written");
    worksheet.write_number(2, 1, 3.5).expect("cell written");
    worksheet.write_string(2, 2, "ok").expect("cell written");
    workbook.save(&input).expect("workbook saved");

    let dataset = excel_read::read_dataset(&input, None).expect("dataset read");
    assert_eq!(
        dataset.rows(),
        vec![
            vec!["alpha".to_string(), "30".to_string(), String::new()],
            vec!["beta".to_string(), "3.5".to_string(), "ok".to_string()],
        ]
    );
}

#[test]
fn sheet_selection_defaults_to_first() {
    let dir = tempdir().expect("temp dir created");
    let input = dir.path().join("multi.xlsx");

    let mut workbook = Workbook::new();
    let first = workbook.add_worksheet();
    first.set_name("Data").expect("sheet named");
    first.write_string(0, 0, "a").expect("header written");
    first.write_string(1, 0, "1").expect("cell written");
    let second = workbook.add_worksheet();
    second.set_name("Other").expect("sheet named");
    second.write_string(0, 0, "b").expect("header written");
    second.write_string(1, 0, "2").expect("cell written");
    workbook.save(&input).expect("workbook saved");

    let by_default = excel_read::read_dataset(&input, None).expect("dataset read");
    assert_eq!(by_default.columns(), vec!["a".to_string()]);

    let by_name = excel_read::read_dataset(&input, Some("Other")).expect("dataset read");
    assert_eq!(by_name.columns(), vec!["b".to_string()]);
}

#[test]
fn missing_sheet_is_reported() {
    let dir = tempdir().expect("temp dir created");
    let input = dir.path().join("people.xlsx");
    write_people_workbook(&input);

    let error = excel_read::read_dataset(&input, Some("Nope")).expect_err("missing sheet rejected");
    assert!(matches!(error, ToolError::InvalidWorkbook(_)));
}

#[test]
fn header_only_workbook_emits_create_table_only() {
    let dir = tempdir().expect("temp dir created");
    let input = dir.path().join("inventory.xlsx");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "sku").expect("header written");
    worksheet.write_string(0, 1, "warehouse").expect("header written");
    workbook.save(&input).expect("workbook saved");

    let output = dir.path().join("inventory_output.sql");
    convert::excel_to_sql(&input, &output, &TableName::new("inventory"), None)
        .expect("conversion succeeded");

    let sql = fs::read_to_string(&output).expect("script read");
    assert!(sql.contains("CREATE TABLE inventory (\n"));
    assert!(sql.ends_with("-- DROP TABLE inventory;\n"));
    assert!(!sql.contains("INSERT INTO"));
}

#[test]
fn existing_output_is_overwritten() {
    let dir = tempdir().expect("temp dir created");
    let input = dir.path().join("people.xlsx");
    write_people_workbook(&input);

    let output = dir.path().join("people_output.sql");
    fs::write(&output, "stale content").expect("stale file written");

    convert::excel_to_sql(&input, &output, &TableName::new("people"), None)
        .expect("conversion succeeded");

    let sql = fs::read_to_string(&output).expect("script read");
    assert!(sql.starts_with("CREATE TABLE people (\n"));
    assert!(!sql.contains("stale content"));
}

#[test]
fn failed_read_leaves_no_output_file() {
    let dir = tempdir().expect("temp dir created");
    let input = dir.path().join("absent.xlsx");
    let output = dir.path().join("absent_output.sql");

    let error = convert::excel_to_sql(&input, &output, &TableName::new("t"), None)
        .expect_err("conversion failed");
    assert!(matches!(error, ToolError::ExcelRead(_)));
    assert!(!output.exists());
}

#[test]
fn write_into_missing_directory_fails_cleanly() {
    let dir = tempdir().expect("temp dir created");
    let input = dir.path().join("people.xlsx");
    write_people_workbook(&input);

    let output = dir.path().join("missing").join("people_output.sql");
    let error = convert::excel_to_sql(&input, &output, &TableName::new("people"), None)
        .expect_err("write failed");
    assert!(matches!(error, ToolError::ScriptWrite { .. }));
    assert!(!output.exists());
}

#[test]
fn default_output_path_sits_beside_input() {
    assert_eq!(
        convert::default_output_path(Path::new("/data/reports/monthly.xlsx")),
        Path::new("/data/reports/monthly_output.sql")
    );
    assert_eq!(
        convert::default_output_path(Path::new("plain.xlsx")),
        Path::new("plain_output.sql")
    );
}
