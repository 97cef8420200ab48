use hitos::{encode_csv, Milestone, MilestoneId, MilestoneStore, MilestoneUpdate, ProjectInfo, CSV_HEADERS};

fn edited_store() -> MilestoneStore {
    let mut store = MilestoneStore::seeded(ProjectInfo::default());

    let id = MilestoneId::new(12);
    let mut update = MilestoneUpdate::from(store.get(id).unwrap());
    update.title = "Enlucido \"interior\", P2\ny P3".to_string();
    update.actual_month = Some(8);
    update.progress_percent = 100;
    store.update(id, update).unwrap();

    store
}

#[test]
fn header_lists_every_field() {
    let csv = encode_csv(&[]).unwrap();
    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_HEADERS.to_vec());
    assert_eq!(reader.records().count(), 0);
}

#[test]
fn round_trips_through_a_csv_reader() {
    let store = edited_store();
    let csv = encode_csv(store.get_all()).unwrap();

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let decoded: Vec<Milestone> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(decoded.len(), store.len());
    assert_eq!(decoded, store.get_all());
}

#[test]
fn empty_actual_month_reads_back_as_empty_string() {
    let store = edited_store();
    let csv = encode_csv(store.get_all()).unwrap();

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let records: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>().unwrap();
    assert_eq!(records.len(), 94);

    for (record, milestone) in records.iter().zip(store.get_all()) {
        assert_eq!(&record[0], milestone.id.to_string());
        assert_eq!(&record[2], milestone.title);
        let actual = milestone
            .actual_month
            .map(|m| m.to_string())
            .unwrap_or_default();
        assert_eq!(&record[4], actual);
        assert_eq!(&record[6], milestone.category);
    }
}

#[test]
fn keeps_input_order() {
    let mut milestones = MilestoneStore::seeded(ProjectInfo::default())
        .get_all()
        .to_vec();
    milestones.reverse();

    let csv = encode_csv(&milestones).unwrap();
    let first_row = csv.lines().nth(1).unwrap();
    assert!(first_row.starts_with("94,94,Luminarias,"));
}
