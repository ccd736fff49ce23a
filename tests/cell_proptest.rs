use orbit::{AtomicCell, CasKind};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Store(u64),
    Swap(u64),
    FetchAdd(u64),
    FetchSub(u64),
    FetchOr(u64),
    FetchXor(u64),
    FetchAnd(u64),
    Cas { expected: u64, desired: u64 },
}

// A small value domain keeps CAS comparisons colliding often enough to
// exercise both outcomes.
fn op_strategy() -> impl Strategy<Value = Op> {
    let small = 0_u64..16;
    prop_oneof![
        small.clone().prop_map(Op::Store),
        small.clone().prop_map(Op::Swap),
        small.clone().prop_map(Op::FetchAdd),
        small.clone().prop_map(Op::FetchSub),
        small.clone().prop_map(Op::FetchOr),
        small.clone().prop_map(Op::FetchXor),
        small.clone().prop_map(Op::FetchAnd),
        (small.clone(), small).prop_map(|(expected, desired)| Op::Cas { expected, desired }),
    ]
}

proptest! {
    #[test]
    fn cell_matches_integer_model(
        initial in 0_u64..16,
        ops in proptest::collection::vec(op_strategy(), 1..64),
    ) {
        let cell = AtomicCell::new(initial);
        let mut model = initial;

        for op in ops {
            match op {
                Op::Store(v) => {
                    cell.store(v);
                    model = v;
                }
                Op::Swap(v) => {
                    prop_assert_eq!(cell.swap(v), model);
                    model = v;
                }
                Op::FetchAdd(v) => {
                    prop_assert_eq!(cell.fetch_add(v), model);
                    model = model.wrapping_add(v);
                }
                Op::FetchSub(v) => {
                    prop_assert_eq!(cell.fetch_sub(v), model);
                    model = model.wrapping_sub(v);
                }
                Op::FetchOr(v) => {
                    prop_assert_eq!(cell.fetch_or(v), model);
                    model |= v;
                }
                Op::FetchXor(v) => {
                    prop_assert_eq!(cell.fetch_xor(v), model);
                    model ^= v;
                }
                Op::FetchAnd(v) => {
                    prop_assert_eq!(cell.fetch_and(v), model);
                    model &= v;
                }
                Op::Cas { expected, desired } => {
                    let mut observed = expected;
                    let swapped = cell.compare_and_swap(&mut observed, desired, CasKind::Strong);
                    prop_assert_eq!(swapped, expected == model);
                    if swapped {
                        model = desired;
                    } else {
                        prop_assert_eq!(observed, model);
                    }
                }
            }
        }

        prop_assert_eq!(cell.load(), model);
    }
}
