//! Random operation sequences checked against `Vec` as a model.

use carton_array::{DynamicArray, GrowthPolicy};
use carton_test_utils::CountingAllocator;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Push(i32),
    Pop,
    Insert(usize, Vec<i32>),
    Erase(usize, usize),
    Reserve(usize),
    ShrinkToFit,
    Clear,
    Set(usize, i32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Push),
        2 => Just(Op::Pop),
        2 => (0usize..64, proptest::collection::vec(any::<i32>(), 0..8))
            .prop_map(|(pos, values)| Op::Insert(pos, values)),
        2 => (0usize..64, 0usize..16).prop_map(|(pos, len)| Op::Erase(pos, len)),
        1 => (0usize..64).prop_map(Op::Reserve),
        1 => Just(Op::ShrinkToFit),
        1 => Just(Op::Clear),
        1 => (0usize..64, any::<i32>()).prop_map(|(pos, v)| Op::Set(pos, v)),
    ]
}

fn apply_model(model: &mut Vec<i32>, op: &Op) {
    match op {
        Op::Push(v) => model.push(*v),
        Op::Pop => {
            model.pop();
        }
        Op::Insert(pos, values) => {
            let pos = (*pos).min(model.len());
            model.splice(pos..pos, values.iter().copied());
        }
        Op::Erase(pos, len) => {
            if *pos <= model.len() {
                let end = if *len == 0 {
                    model.len()
                } else {
                    (*pos + *len).min(model.len())
                };
                model.drain(*pos..end);
            }
        }
        Op::Reserve(cap) => model.truncate(*cap),
        Op::ShrinkToFit => {}
        Op::Clear => model.clear(),
        Op::Set(pos, v) => {
            if let Some(slot) = model.get_mut(*pos) {
                *slot = *v;
            }
        }
    }
}

fn apply_array(array: &mut DynamicArray<i32, CountingAllocator>, op: &Op) {
    match op {
        Op::Push(v) => array.push_back(*v).unwrap(),
        Op::Pop => {
            array.pop_back();
        }
        Op::Insert(pos, values) => array.insert_slice(*pos, values).unwrap(),
        Op::Erase(pos, len) => {
            array.erase(*pos, *len);
        }
        Op::Reserve(cap) => array.reserve(*cap).unwrap(),
        Op::ShrinkToFit => array.shrink_to_fit().unwrap(),
        Op::Clear => array.clear().unwrap(),
        Op::Set(pos, v) => {
            let _ = array.set(*pos, *v);
        }
    }
}

proptest! {
    #[test]
    fn matches_vec_model(ops in proptest::collection::vec(op(), 0..80)) {
        let alloc = CountingAllocator::new();
        {
            let mut array = DynamicArray::new_in(alloc.clone()).unwrap();
            let mut model = Vec::new();
            for op in &ops {
                apply_model(&mut model, op);
                apply_array(&mut array, op);
                prop_assert_eq!(array.data(), model.as_slice());
                prop_assert!(array.capacity() >= array.len());
                prop_assert!(alloc.live_blocks() <= 1);
            }
        }
        prop_assert_eq!(alloc.live_blocks(), 0);
    }

    #[test]
    fn removals_respect_shrink_bound(
        n in 1usize..300,
        removals in proptest::collection::vec((0usize..300, 1usize..20), 1..40),
    ) {
        let policy = GrowthPolicy::DEFAULT;
        let mut array = DynamicArray::from_elem(n, 0u16).unwrap();
        for (pos, len) in removals {
            let pos = pos % (array.len() + 1);
            array.erase(pos, len);
            prop_assert!(array.capacity() >= array.len());
            if array.is_empty() {
                prop_assert_eq!(array.capacity(), policy.initial_capacity);
            } else {
                prop_assert!(!policy.should_shrink(array.len(), array.capacity()));
            }
        }
    }

    #[test]
    fn copies_are_independent(
        values in proptest::collection::vec(any::<i64>(), 0..50),
        extra in any::<i64>(),
    ) {
        let original = DynamicArray::from_slice(&values).unwrap();
        let mut copy = original.try_clone().unwrap();
        copy.push_back(extra).unwrap();
        copy.erase(0, 1);
        prop_assert_eq!(original.data(), values.as_slice());
        prop_assert_eq!(copy.len(), values.len());
    }

    #[test]
    fn take_transfers_everything(values in proptest::collection::vec(any::<u8>(), 1..50)) {
        let mut source = DynamicArray::from_slice(&values).unwrap();
        let cap = source.capacity();
        let moved = source.take().unwrap();
        prop_assert_eq!(moved.data(), values.as_slice());
        prop_assert_eq!(moved.capacity(), cap);
        prop_assert!(source.is_empty());
        prop_assert_eq!(source.capacity(), GrowthPolicy::DEFAULT_INITIAL_CAPACITY);
    }
}
