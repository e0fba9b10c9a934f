//! The reference demonstration, step by step, with the state after each
//! step asserted.

use carton_alloc::AllocError;
use carton_array::{ArrayError, DynamicArray};
use carton_test_utils::fixtures::{
    ERASE_RESULT, ERASE_SOURCE, FILL_LEN, FILL_VALUE, PUSH_MARKER, RAW_SOURCE, TEN_GIB_OF_I32,
};
use carton_test_utils::FailingAllocator;

#[test]
fn demonstration_sequence() {
    let v0 = unsafe { DynamicArray::from_raw_parts(RAW_SOURCE.as_ptr(), RAW_SOURCE.len()) }.unwrap();
    assert_eq!(v0.to_string(), "9; 8; 7; 6; 5; 4; 3; 2; 1; ");
    assert_eq!((v0.len(), v0.capacity()), (9, 18));

    let v1 = DynamicArray::from_elem(FILL_LEN, FILL_VALUE).unwrap();
    assert_eq!((v1.len(), v1.capacity()), (10, 20));

    let mut v2 = v1.clone();
    assert_eq!(v2, v1);

    let v3 = v2.take().unwrap();
    assert_eq!((v2.len(), v2.capacity()), (0, 10));
    assert_eq!(v3, v1);

    let mut v4 = DynamicArray::from_slice(&ERASE_SOURCE).unwrap();
    assert_eq!((v4.len(), v4.capacity()), (11, 22));

    let mut v5 = v4.clone();
    assert_eq!(v5, v4);

    v4.erase(3, 3);
    assert_eq!(v4, ERASE_RESULT);
    assert_eq!((v4.len(), v4.capacity()), (8, 22));

    v4.reserve(5).unwrap();
    assert_eq!(v4, [11, 20, 40, 900, 1000]);
    assert_eq!(v4.capacity(), 5);

    v4.assign(&v1).unwrap();
    assert_eq!(v4, v1);
    assert_eq!(v4.capacity(), 20);

    v5.push_back(PUSH_MARKER).unwrap();
    assert_eq!((v5.len(), v5.capacity()), (12, 22));
    assert_eq!(v5[11], PUSH_MARKER);

    v4.insert_slice(3, v5.data()).unwrap();
    assert_eq!((v4.len(), v4.capacity()), (22, 44));
    assert_eq!(&v4.data()[..3], &[10, 10, 10]);
    assert_eq!(&v4.data()[3..15], v5.data());
    assert!(v4.data()[15..].iter().all(|&v| v == FILL_VALUE));

    v4.insert(0, 0).unwrap();
    assert_eq!(v4.len(), 23);
    assert_eq!(v4[0], 0);

    v4[1] = 432;
    assert_eq!(&v4.data()[..3], &[0, 432, 10]);

    for i in 0..1000 {
        v5.push_back(i).unwrap();
    }
    assert_eq!((v5.len(), v5.capacity()), (1012, 1534));
    assert_eq!(v5[1011], 999);

    let err = v4.get(100).unwrap_err();
    assert_eq!(err, ArrayError::OutOfRange { index: 100, len: 23 });
    assert_eq!(err.to_string(), "no such element: index 100 out of range for length 23");
}

#[test]
fn null_source_is_rejected() {
    let err = unsafe { DynamicArray::<i32>::from_raw_parts(std::ptr::null(), 1) }.unwrap_err();
    assert!(matches!(err, ArrayError::InvalidArgument { .. }));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn ten_gib_request_is_refused() {
    let alloc = FailingAllocator::above(1 << 30);
    let err = DynamicArray::<i32, _>::with_len_in(TEN_GIB_OF_I32, alloc.clone()).unwrap_err();
    assert_eq!(
        err,
        ArrayError::AllocationFailure(AllocError::OutOfMemory {
            requested: TEN_GIB_OF_I32 * 2 * 4,
        })
    );
    assert_eq!(alloc.live_blocks(), 0);
}

#[test]
fn unrepresentable_request_is_refused() {
    let err = DynamicArray::<u64>::with_len(usize::MAX / 4).unwrap_err();
    assert!(matches!(
        err,
        ArrayError::AllocationFailure(AllocError::CapacityOverflow { .. })
    ));
}
