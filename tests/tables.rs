use hashlab::{
    primary_hash, ChainTable, DoubleHashTable, KeySource, ProbeTable, RandomKeys, TableError, KNUTH,
};

fn random_keys(seed: u64, count: usize, range: u32) -> Vec<u32> {
    RandomKeys::seeded(seed).keys(count, range)
}

#[test]
fn chain_new_is_empty() {
    let table = ChainTable::new(10).unwrap();
    assert_eq!(table.table_size(), 10);
    assert!(table.is_empty());
    assert_eq!(table.max_chain_length(), 0);
    for (i, cell) in table.cells().iter().enumerate() {
        assert_eq!(cell.slot, i);
        assert!(cell.chain.is_empty());
    }
}

#[test]
fn chain_rejects_zero_size() {
    assert_eq!(
        ChainTable::new(0).unwrap_err(),
        TableError::InvalidTableSize { size: 0, min: 1 }
    );
}

#[test]
fn chain_collisions_keep_insertion_order() {
    let mut table = ChainTable::new(10).unwrap();
    assert_eq!(table.insert(1, KNUTH), 6);
    assert_eq!(table.insert(2, KNUTH), 2);
    assert_eq!(table.insert(11, KNUTH), 7);
    assert_eq!(table.insert(6, KNUTH), 7);
    assert_eq!(table.insert(11, KNUTH), 7);

    assert_eq!(table.chain(7), Some(&[11, 6, 11][..]));
    assert_eq!(table.max_chain_length(), 3);
    assert_eq!(table.len(), 5);
    assert_eq!(table.chain(10), None);
}

#[test]
fn chain_conserves_keys() {
    for (seed, size) in [(1, 1), (2, 10), (3, 97), (4, 1000)] {
        let keys = random_keys(seed, 500, 1000);
        let table = ChainTable::from_keys(size, &keys, KNUTH).unwrap();

        let total: usize = table.cells().iter().map(|c| c.chain.len()).sum();
        assert_eq!(total, keys.len());
        assert_eq!(table.len(), keys.len());
        for cell in table.cells() {
            for &key in &cell.chain {
                assert_eq!(primary_hash(key, KNUTH, size), cell.slot);
            }
        }
    }
}

#[test]
fn chain_report_format() {
    let table = ChainTable::from_keys(10, &[1, 2, 11, 6], KNUTH).unwrap();
    let report = table.report();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "0: ");
    assert_eq!(lines[2], "2: 2");
    assert_eq!(lines[6], "6: 1");
    assert_eq!(lines[7], "7: 11 6");
    assert_eq!(report, table.report());
    assert_eq!(report, table.to_string());
}

#[test]
fn linear_probe_walks_forward_and_wraps() {
    let mut table = ProbeTable::new(10).unwrap();
    assert_eq!(table.insert(6, KNUTH), Ok(7));
    assert_eq!(table.insert(11, KNUTH), Ok(8));
    assert_eq!(table.insert(8, KNUTH), Ok(9));
    assert_eq!(table.insert(8, KNUTH), Ok(0));
    assert_eq!(table.get(0), Some(8));
    assert_eq!(table.get(7), Some(6));
    assert_eq!(table.get(1), None);
    assert_eq!(table.len(), 4);
    // 11 stepped over one cell, the second 8 stepped over one.
    assert_eq!(table.probes(), 2);
}

#[test]
fn linear_never_overwrites() {
    let keys = random_keys(7, 1000, 1000);
    let mut table = ProbeTable::new(1550).unwrap();
    let mut before = table.slots().to_vec();
    for &key in &keys {
        let slot = table.insert(key, KNUTH).unwrap();
        assert_eq!(before[slot], None);
        for (i, cell) in before.iter().enumerate() {
            if cell.is_some() {
                assert_eq!(table.get(i), *cell);
            }
        }
        before = table.slots().to_vec();
    }
    assert_eq!(table.slots().iter().filter(|c| c.is_some()).count(), keys.len());
    assert!((table.load_factor() - 1000.0 / 1550.0).abs() < 1e-12);
}

#[test]
fn linear_full_table_errors() {
    let mut table = ProbeTable::from_keys(3, &[5, 5, 5], KNUTH).unwrap();
    assert_eq!(table.insert(5, KNUTH), Err(TableError::TableFull { capacity: 3 }));
    assert_eq!(table.len(), 3);

    let mut single = ProbeTable::new(1).unwrap();
    assert_eq!(single.insert(42, 0.83), Ok(0));
    assert_eq!(single.insert(43, 0.83), Err(TableError::TableFull { capacity: 1 }));
}

#[test]
fn linear_report_format() {
    let table = ProbeTable::from_keys(10, &[6, 11], KNUTH).unwrap();
    let report = table.report();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[7], "7: 6");
    assert_eq!(lines[8], "8: 11");
    assert_eq!(lines[9], "9: ");
    assert_eq!(report, table.report());
}

#[test]
fn double_hash_steps_by_secondary() {
    let mut table = DoubleHashTable::new(10).unwrap();
    assert_eq!(table.insert(6, KNUTH), Ok(7));
    // start 7, step 3
    assert_eq!(table.insert(11, KNUTH), Ok(0));
    assert_eq!(table.get(0), Some(11));
    assert_eq!(table.probes(), 1);
}

#[test]
fn double_rejects_tiny_tables() {
    assert_eq!(
        DoubleHashTable::new(1).unwrap_err(),
        TableError::InvalidTableSize { size: 1, min: 2 }
    );
    assert_eq!(
        DoubleHashTable::new(0).unwrap_err(),
        TableError::InvalidTableSize { size: 0, min: 2 }
    );
}

#[test]
fn double_fills_every_slot_then_errors() {
    for n in [2, 10, 64, 97] {
        let keys = random_keys(n as u64, n, 1000);
        let mut table = DoubleHashTable::from_keys(n, &keys, KNUTH).unwrap();
        assert_eq!(table.len(), n);
        assert!(table.slots().iter().all(|c| c.is_some()));
        assert_eq!(table.insert(1, KNUTH), Err(TableError::TableFull { capacity: n }));
    }
}

#[test]
fn double_never_overwrites() {
    let keys = random_keys(11, 1000, 1000);
    let mut table = DoubleHashTable::new(1550).unwrap();
    for (placed, &key) in keys.iter().enumerate() {
        let slot = table.insert(key, KNUTH).unwrap();
        assert_eq!(table.get(slot), Some(key));
        assert_eq!(table.len(), placed + 1);
    }
    assert_eq!(table.slots().iter().filter(|c| c.is_some()).count(), keys.len());
    assert_eq!(table.report(), table.report());
}

#[test]
fn same_keys_same_occupancy() {
    let keys = random_keys(5, 1000, 1000);
    let linear = ProbeTable::from_keys(1550, &keys, KNUTH).unwrap();
    let double = DoubleHashTable::from_keys(1550, &keys, KNUTH).unwrap();

    let mut a: Vec<u32> = linear.slots().iter().flatten().copied().collect();
    let mut b: Vec<u32> = double.slots().iter().flatten().copied().collect();
    a.sort_unstable();
    b.sort_unstable();
    let mut expected = keys.clone();
    expected.sort_unstable();
    assert_eq!(a, expected);
    assert_eq!(b, expected);
}
