use crate::helpers::{Line, Order, Point};
use marshal::ByteBuf;
use proptest::prelude::*;

fn arb_point() -> impl Strategy<Value = Point> {
    (any::<i64>(), any::<i64>()).prop_map(|(x, y)| Point { x, y })
}

fn arb_line() -> impl Strategy<Value = Line> {
    (".*", any::<i32>()).prop_map(|(sku, qty)| Line { sku, qty })
}

fn arb_order() -> impl Strategy<Value = Order> {
    (
        any::<u32>(),
        ".*",
        // NaN != NaN
        any::<f64>().prop_filter("not NaN", |f| !f.is_nan()),
        any::<bool>(),
        prop::collection::vec(arb_line(), 0..5),
        prop::option::of(".*"),
        prop::collection::vec(any::<u8>(), 0..64),
        prop::collection::vec(prop::option::of(any::<i64>()), 0..5),
        prop::option::of(arb_point()),
    )
        .prop_map(
            |(id, customer, total, paid, lines, note, receipt, discounts, origin)| Order {
                id,
                customer,
                total,
                paid,
                lines,
                note,
                receipt: ByteBuf(receipt),
                discounts,
                origin,
            },
        )
}

proptest! {
    #[test]
    fn binary_round_trip(order in arb_order()) {
        let blob = marshal::encode_binary(Some(&order))?;
        prop_assert_eq!(Some(order), marshal::decode_binary::<Order>(Some(&blob[..]))?);
    }

    #[test]
    fn text_round_trip(order in arb_order()) {
        let doc = marshal::encode_text(Some(&order))?;
        prop_assert_eq!(Some(order), marshal::decode_text::<Order>(&doc)?);
    }

    #[test]
    fn arbitrary_bytes_never_panic(blob in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = marshal::decode_binary::<Order>(Some(&blob[..]));
    }

    #[test]
    fn arbitrary_text_never_panics(doc in ".*") {
        let _ = marshal::decode_text::<Order>(&doc);
    }
}
