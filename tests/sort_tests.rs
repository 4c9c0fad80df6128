use blockvec::BlockVec;

#[test]
fn test_sort_empty() {
    let mut buffer = [0u8; 24];
    let mut strings = BlockVec::new(&mut buffer, 8).unwrap();
    strings.sort();
    assert!(strings.is_empty());
    assert!(strings.as_bytes().iter().all(|&b| b == 0));
}

#[test]
fn test_sort_single() {
    let mut buffer = [0u8; 24];
    let mut strings = BlockVec::new(&mut buffer, 8).unwrap();
    strings.push_back(b"AAAAAAA").unwrap();
    strings.sort();
    assert_eq!(strings.get(0), Some(&b"AAAAAAA"[..]));
}

#[test]
fn test_sort_one_to_one() {
    let mut buffer = [0u8; 24];
    let mut strings = BlockVec::new(&mut buffer, 8).unwrap();

    strings.push_back(b"CCCCCCC").unwrap();
    strings.push_back(b"BBBBBBB").unwrap();
    strings.push_back(b"AAAAAAA").unwrap();

    strings.sort();

    assert_eq!(strings.as_bytes(), b"AAAAAAA\0BBBBBBB\0CCCCCCC\0");
    assert!(strings.is_one_to_one());
}

#[test]
fn test_sort_multi_block() {
    let mut buffer = [0u8; 48];
    let mut strings = BlockVec::new(&mut buffer, 3).unwrap();

    for s in [&b"pear"[..], b"fig", b"apple", b"kiwi", b"a", b"banana"] {
        strings.push_back(s).unwrap();
    }
    let block_used = strings.block_used();

    strings.sort();

    let sorted: Vec<&[u8]> = strings.iter().collect();
    assert_eq!(
        sorted,
        [&b"a"[..], b"apple", b"banana", b"fig", b"kiwi", b"pear"]
    );
    assert_eq!(strings.len(), 6);
    assert_eq!(strings.block_used(), block_used);
    assert!(strings.as_bytes()[block_used * 3..].iter().all(|&b| b == 0));
}

#[test]
fn test_sort_by_custom_order() {
    let mut buffer = [0u8; 64];
    let mut strings = BlockVec::new(&mut buffer, 4).unwrap();

    strings.split(b"bb a dddd ccc", b' ');
    strings.sort_by(|a, b| b.len().cmp(&a.len()));

    let sorted: Vec<&[u8]> = strings.iter().collect();
    assert_eq!(sorted, [&b"dddd"[..], b"ccc", b"bb", b"a"]);
}

#[test]
fn test_sort_is_stable() {
    let mut buffer = [0u8; 64];
    let mut strings = BlockVec::new(&mut buffer, 4).unwrap();

    strings.split(b"b1 a1 b2 a2 b3", b' ');
    strings.sort_by(|a, b| a[0].cmp(&b[0]));

    let sorted: Vec<&[u8]> = strings.iter().collect();
    assert_eq!(sorted, [&b"a1"[..], b"a2", b"b1", b"b2", b"b3"]);
}

#[test]
fn test_sort_bounded_compare() {
    let mut buffer = [0u8; 64];
    let mut strings = BlockVec::new(&mut buffer, 8).unwrap();

    strings.split(b"abz aby abx", b' ');
    // Only the first two bytes take part, so everything compares equal
    strings.sort_by(|a, b| a[..a.len().min(2)].cmp(&b[..b.len().min(2)]));

    let sorted: Vec<&[u8]> = strings.iter().collect();
    assert_eq!(sorted, [&b"abz"[..], b"aby", b"abx"]);
}
