use crate::PageRequest;

#[test]
fn test_page_request_zero_size_means_everything() {
    let page = PageRequest::new(3, 0).unwrap();
    assert_eq!(page.limit_offset(), None);
    assert_eq!(PageRequest::all().limit_offset(), None);
}

#[test]
fn test_page_request_offset_is_one_indexed() {
    assert_eq!(PageRequest::new(1, 10).unwrap().limit_offset(), Some((10, 0)));
    assert_eq!(PageRequest::new(3, 10).unwrap().limit_offset(), Some((10, 20)));
}

#[test]
fn test_page_request_rejects_page_zero_when_paginated() {
    assert!(PageRequest::new(0, 10).is_err());
}

#[test]
fn test_page_request_large_values_do_not_overflow() {
    let page = PageRequest::new(u32::MAX, u32::MAX).unwrap();
    let (limit, offset) = page.limit_offset().unwrap();
    assert_eq!(limit, i64::from(u32::MAX));
    assert_eq!(offset, i64::from(u32::MAX - 1) * i64::from(u32::MAX));
}
