use csv::ReaderBuilder;
use lfs_bench::serde::from_json_slice;
use lfs_bench::{
    run_benchmark, sheet_records, write_report, BenchConfig, BenchmarkReport, CsvSink, SizeRange,
};
use lfs_search::Strategy;
use lfs_shapes::Shape;
use tempfile::tempdir;

fn config() -> BenchConfig {
    let mut config = BenchConfig::default();
    config.seed = 99;
    config.threads = 2;
    config.sizes = SizeRange::new(1, 10);
    config.trials_per_size = 4;
    config.timing.enabled = false;
    config
}

#[test]
fn every_shape_gets_a_sheet_in_the_expected_layout() {
    let dir = tempdir().expect("tempdir");
    let config = config();
    let mut sink = CsvSink::create(dir.path()).expect("sink");
    run_benchmark(&config, &mut sink).expect("benchmark");
    assert_eq!(sink.written().len(), Shape::ALL.len());

    let path = dir.path().join("Linear Outlier.csv");
    assert_eq!(sink.path_for(Shape::LinearOutlier), path);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .expect("reader");
    let records: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>().expect("records");
    assert_eq!(records.len(), 11);

    let header = &records[0];
    assert_eq!(header.len(), 2 + 4 * Strategy::ALL.len());
    assert_eq!(&header[0], "Sample Count");
    assert_eq!(&header[1], "Linear Search Min");
    assert_eq!(&header[2], "Linear Search Max");
    assert_eq!(&header[3], "Linear Search Avg");
    assert_eq!(&header[4], "Linear Search Single");
    assert_eq!(&header[header.len() - 1], "Sequence");

    for (offset, record) in records[1..].iter().enumerate() {
        assert_eq!(record.len(), header.len());
        assert_eq!(&record[0], (offset + 1).to_string());
        let avg = &record[3];
        let decimals = avg.split('.').nth(1).expect("fractional part");
        assert_eq!(decimals.len(), 6);
    }
    // the outlier sits at the end of the largest sample sequence
    assert_eq!(&records[10][header.len() - 1], "200000");
}

#[test]
fn records_pair_sizes_with_sample_values() {
    let config = config();
    let mut sheets = Vec::new();
    run_benchmark(&config, &mut sheets).expect("benchmark");
    let sheet = &sheets[1];
    let records = sheet_records(sheet);
    for (row, value) in records[1..].iter().zip(&sheet.sample_sequence) {
        assert_eq!(row.last(), Some(&value.to_string()));
    }
}

#[test]
fn report_json_reads_back() {
    let dir = tempdir().expect("tempdir");
    let config = config();
    let mut sheets = Vec::new();
    let report = run_benchmark(&config, &mut sheets).expect("benchmark");
    let path = write_report(dir.path(), &report).expect("report");
    assert_eq!(path, dir.path().join("report.json"));
    let bytes = std::fs::read(&path).expect("read");
    let decoded: BenchmarkReport = from_json_slice(&bytes).expect("decode");
    assert_eq!(decoded.provenance, report.provenance);
    assert_eq!(decoded.trials_per_size, 4);
    let shapes: Vec<Shape> = decoded.shapes.iter().map(|summary| summary.shape).collect();
    assert_eq!(shapes, Shape::ALL.to_vec());
    assert_eq!(decoded.total_mismatches(), 0);
}

#[test]
fn unwritable_output_directory_is_an_io_error() {
    let dir = tempdir().expect("tempdir");
    let blocker = dir.path().join("taken");
    std::fs::write(&blocker, b"file").expect("write");
    let err = CsvSink::create(blocker.join("nested")).unwrap_err();
    assert_eq!(err.info().code, "output-dir");
}
