use crate::helpers::{gen_chain, gen_order, Order, Tree};
use anyhow::Result;
use marshal::{ByteBuf, Codec, CodecConfig};

#[test]
fn order() -> Result<()> {
    let order = gen_order();

    let blob = marshal::encode_binary(Some(&order))?;
    assert_eq!(Some(order.clone()), marshal::decode_binary::<Order>(Some(&blob[..]))?);

    let doc = marshal::encode_text(Some(&order))?;
    assert!(doc.contains("<Customer>Ann &lt;ann@example.com&gt; &amp; co.</Customer>"));
    assert!(doc.contains(r#"<Note nil="true" />"#));
    assert!(doc.contains("<Receipt>007fff</Receipt>"));
    assert_eq!(Some(order), marshal::decode_text::<Order>(&doc)?);

    Ok(())
}

#[test]
fn order_in_compact_text() -> Result<()> {
    let codec = Codec::new(CodecConfig {
        text_indent: 0,
        xml_declaration: false,
        ..CodecConfig::default()
    });
    let order = Order {
        note: Some(String::from("line 1\r\nline 2")),
        lines: vec![],
        ..gen_order()
    };

    let doc = codec.encode_text(Some(&order))?;
    assert!(doc.starts_with("<Order><Id>42</Id>"));
    assert!(doc.contains("line 1&#13;\nline 2"));
    assert!(doc.contains("<Lines />"));
    assert_eq!(Some(order), codec.decode_text::<Order>(&doc)?);

    Ok(())
}

#[test]
fn self_containing_record() -> Result<()> {
    let tree = Tree {
        label: String::from("root"),
        kids: vec![gen_chain(3), gen_chain(1)],
    };

    let blob = marshal::encode_binary(Some(&tree))?;
    assert_eq!(Some(tree.clone()), marshal::decode_binary::<Tree>(Some(&blob[..]))?);

    let doc = marshal::encode_text(Some(&tree))?;
    assert_eq!(Some(tree), marshal::decode_text::<Tree>(&doc)?);

    Ok(())
}

#[test]
fn non_record_roots() -> Result<()> {
    let nums = vec![i64::MIN, 0, i64::MAX];
    let doc = marshal::encode_text(Some(&nums))?;
    assert!(doc.contains("<seq_i64>"));
    assert_eq!(Some(nums.clone()), marshal::decode_text::<Vec<i64>>(&doc)?);
    let blob = marshal::encode_binary(Some(&nums))?;
    assert_eq!(Some(nums), marshal::decode_binary::<Vec<i64>>(Some(&blob[..]))?);

    let empty = String::new();
    let doc = marshal::encode_text(Some(&empty))?;
    assert!(doc.ends_with("<str />"));
    assert_eq!(Some(empty), marshal::decode_text::<String>(&doc)?);

    let bytes = ByteBuf(vec![]);
    let blob = marshal::encode_binary(Some(&bytes))?;
    assert_eq!(Some(bytes), marshal::decode_binary::<ByteBuf>(Some(&blob[..]))?);

    /* Some(None) is a present value whose content is absent. */
    let blob = marshal::encode_binary(Some(&None::<i64>))?;
    assert_eq!(Some(None), marshal::decode_binary::<Option<i64>>(Some(&blob[..]))?);
    /* Its text form would be the nil root that reads back as None. */
    assert!(marshal::encode_text(Some(&None::<i64>))
        .unwrap_err()
        .is_encode());
    let doc = marshal::encode_text(Some(&Some(7i64)))?;
    assert_eq!(Some(Some(7)), marshal::decode_text::<Option<i64>>(&doc)?);

    for f in [f64::INFINITY, f64::NEG_INFINITY, -0.0, 1e300, f64::MIN_POSITIVE] {
        let doc = marshal::encode_text(Some(&f))?;
        let back = marshal::decode_text::<f64>(&doc)?;
        assert_eq!(Some(f.to_bits()), back.map(f64::to_bits));
    }
    let doc = marshal::encode_text(Some(&f64::NAN))?;
    assert!(marshal::decode_text::<f64>(&doc)?.is_some_and(f64::is_nan));

    Ok(())
}
