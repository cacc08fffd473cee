//! Checks that releasing a list gives back every byte it allocated.
//!
//! This file holds a single test, so the counting allocator only ever sees
//! one thread doing list work.

use char_list::{CharList, StringLibrary};
use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicIsize, Ordering};

struct Counting;

static LIVE_BYTES: AtomicIsize = AtomicIsize::new(0);

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            LIVE_BYTES.fetch_add(layout.size() as isize, Ordering::SeqCst);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        LIVE_BYTES.fetch_sub(layout.size() as isize, Ordering::SeqCst);
    }
}

#[global_allocator]
static GLOBAL: Counting = Counting;

fn live() -> isize {
    LIVE_BYTES.load(Ordering::SeqCst)
}

#[test]
fn releasing_lists_frees_everything() {
    // a list that is dropped gives back everything it took
    let before = live();
    {
        let mut list: CharList = "HelloWorld!".parse().unwrap();
        let start = list.cursor_start();
        list.insert_after_all(&start, 'l', 'X').unwrap();
        assert!(live() > before);
        list.clear();
        list.try_extend("again".chars()).unwrap();
    }
    assert_eq!(live(), before);

    // clearing vacates every slot: refilling up to the old length must not
    // grow the storage
    let mut s = StringLibrary::create("HelloWorld!").unwrap();
    let mut cursor = s.cursor();
    s.insert_after_first(&mut cursor, 'o', ' ').unwrap();
    s.insert_after_all('l', 'X').unwrap();
    s.delete_first(' ');
    s.delete_all('X');
    let populated = live();
    s.destroy();
    assert!(s.is_empty());
    assert_eq!(live(), populated);
    s.append_text("HelloWorld!!!!").unwrap();
    assert_eq!(live(), populated);
    drop(s);
    assert_eq!(live(), before);
}
