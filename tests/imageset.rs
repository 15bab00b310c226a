extern crate icoforge;

use icoforge::{Error, IconImage, ImageSet, SourceBitmap};
use std::cell::Cell;
use std::rc::Rc;

//===========================================================================//

fn solid(size: u32, bgra: [u8; 4]) -> IconImage {
    let mut data = Vec::with_capacity(4 * (size as usize) * (size as usize));
    for _ in 0..(size * size) {
        data.extend_from_slice(&bgra);
    }
    IconImage::from_bgra(size, data).unwrap()
}

fn watch(set: &mut ImageSet) -> Rc<Cell<usize>> {
    let count = Rc::new(Cell::new(0));
    let observer = Rc::clone(&count);
    set.on_change(move || observer.set(observer.get() + 1));
    count
}

//===========================================================================//

#[test]
fn new_set_is_empty() {
    let set = ImageSet::new();
    assert_eq!(set.len(), 0);
    assert!(set.is_empty());
    assert!(set.images().next().is_none());
    assert!(!set.contains_size(16));
}

#[test]
fn add_then_look_up_by_size() {
    let mut set = ImageSet::new();
    set.add(&solid(16, [0x00, 0x00, 0xff, 0xff])).unwrap();
    set.add(&solid(48, [0xff, 0x00, 0x00, 0xff])).unwrap();
    assert_eq!(set.len(), 2);
    assert!(set.contains_size(16));
    assert!(set.contains_size(48));
    assert!(!set.contains_size(32));
    assert_eq!(set.get(48).unwrap().bgra_data()[0], 0xff);
    assert!(set.get(32).is_none());
}

#[test]
fn iteration_is_ascending_regardless_of_insertion_order() {
    let mut set = ImageSet::new();
    set.add(&solid(128, [0x00, 0x00, 0x00, 0xff])).unwrap();
    set.add(&solid(16, [0x00, 0x00, 0x00, 0xff])).unwrap();
    set.add(&solid(256, [0x00, 0x00, 0x00, 0xff])).unwrap();
    set.add(&solid(32, [0x00, 0x00, 0x00, 0xff])).unwrap();
    let sizes: Vec<u32> = set.images().map(|image| image.size()).collect();
    assert_eq!(sizes, vec![16, 32, 128, 256]);
}

#[test]
fn add_rejects_non_square_sources() {
    struct Wide;
    impl SourceBitmap for Wide {
        fn pixel_width(&self) -> u32 {
            32
        }
        fn pixel_height(&self) -> u32 {
            16
        }
        fn to_bgra(&self) -> Vec<u8> {
            vec![0u8; 4 * 32 * 16]
        }
    }
    let mut set = ImageSet::new();
    match set.add(&Wide) {
        Err(Error::InvalidSize { width: 32, height: 16 }) => {}
        other => panic!("expected InvalidSize, got {:?}", other),
    }
    assert!(set.is_empty());
}

#[test]
fn add_rejects_sizes_outside_the_supported_range() {
    let mut set = ImageSet::new();
    match IconImage::from_bgra(8, vec![0u8; 4 * 8 * 8]) {
        Err(Error::InvalidSize { width: 8, height: 8 }) => {}
        other => panic!("expected InvalidSize, got {:?}", other),
    }
    match IconImage::from_bgra(512, vec![0u8; 4 * 512 * 512]) {
        Err(Error::InvalidSize { width: 512, height: 512 }) => {}
        other => panic!("expected InvalidSize, got {:?}", other),
    }
    assert!(set.add(&solid(16, [0, 0, 0, 0xff])).is_ok());
}

#[test]
fn add_rejects_duplicates_and_keeps_the_original() {
    let mut set = ImageSet::new();
    set.add(&solid(32, [0x00, 0x00, 0xff, 0xff])).unwrap();
    match set.add(&solid(32, [0xff, 0x00, 0x00, 0xff])) {
        Err(Error::DuplicateSize(32)) => {}
        other => panic!("expected DuplicateSize, got {:?}", other),
    }
    assert_eq!(set.len(), 1);
    // Still the red image, not the blue one:
    assert_eq!(set.get(32).unwrap().bgra_data()[2], 0xff);
}

#[test]
fn set_inserts_and_replaces() {
    let mut set = ImageSet::new();
    assert!(set.set(&solid(32, [0x00, 0x00, 0xff, 0xff])).unwrap());
    assert!(set.set(&solid(32, [0xff, 0x00, 0x00, 0xff])).unwrap());
    assert_eq!(set.len(), 1);
    assert_eq!(set.get(32).unwrap().bgra_data()[0], 0xff);
}

#[test]
fn set_with_identical_content_reports_no_change() {
    let mut set = ImageSet::new();
    assert!(set.set(&solid(32, [0x00, 0x00, 0xff, 0xff])).unwrap());
    assert!(!set.set(&solid(32, [0x00, 0x00, 0xff, 0xff])).unwrap());
    assert_eq!(set.len(), 1);
}

#[test]
fn remove_and_clear() {
    let mut set = ImageSet::new();
    set.add(&solid(16, [0, 0, 0, 0xff])).unwrap();
    set.add(&solid(32, [0, 0, 0, 0xff])).unwrap();
    assert!(set.remove(16));
    assert!(!set.remove(16));
    assert_eq!(set.len(), 1);
    set.clear();
    assert!(set.is_empty());
}

//===========================================================================//

#[test]
fn observers_fire_once_per_actual_change() {
    let mut set = ImageSet::new();
    let count = watch(&mut set);
    set.add(&solid(16, [0x00, 0x00, 0xff, 0xff])).unwrap();
    assert_eq!(count.get(), 1);
    set.add(&solid(32, [0x00, 0x00, 0xff, 0xff])).unwrap();
    assert_eq!(count.get(), 2);
    set.set(&solid(16, [0xff, 0x00, 0x00, 0xff])).unwrap();
    assert_eq!(count.get(), 3);
    // Replacing an image with identical bytes is not a change:
    set.set(&solid(16, [0xff, 0x00, 0x00, 0xff])).unwrap();
    assert_eq!(count.get(), 3);
    assert!(set.remove(32));
    assert_eq!(count.get(), 4);
    assert!(!set.remove(32));
    assert_eq!(count.get(), 4);
    set.clear();
    assert_eq!(count.get(), 5);
    // Clearing an already-empty set is not a change either:
    set.clear();
    assert_eq!(count.get(), 5);
}

#[test]
fn failed_mutations_do_not_notify() {
    let mut set = ImageSet::new();
    set.add(&solid(32, [0x00, 0x00, 0xff, 0xff])).unwrap();
    let count = watch(&mut set);
    assert!(set.add(&solid(32, [0xff, 0x00, 0x00, 0xff])).is_err());
    assert_eq!(count.get(), 0);
}

#[test]
fn every_registered_observer_fires() {
    let mut set = ImageSet::new();
    let first = watch(&mut set);
    let second = watch(&mut set);
    set.add(&solid(16, [0, 0, 0, 0xff])).unwrap();
    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 1);
}

//===========================================================================//
