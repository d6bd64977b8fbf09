use crate::helpers::{gen_order, Line, Order, Point};
use anyhow::Result;
use marshal::{Datum, Deser, Record, RecordShape, Ser, Shape, Shaped};

/// Shares its record name with [`Point`], but not its member types.
#[derive(PartialEq, Debug)]
struct NamedPoint {
    x: String,
}
impl Shaped for NamedPoint {
    fn shape() -> Shape {
        Shape::Record(RecordShape::new("Point").field::<String>("X"))
    }
}
impl Ser for NamedPoint {
    fn to_datum(&self) -> Result<Datum> {
        let rec = Record::new("Point").with("X", &self.x)?;
        Ok(Datum::Record(rec))
    }
}
impl Deser for NamedPoint {
    fn from_datum(dat: Datum) -> Result<Self> {
        let mut rec = Record::expect(dat, "Point")?;
        Ok(Self { x: rec.take("X")? })
    }
}

#[test]
fn absent_input() -> Result<()> {
    let err = marshal::encode_binary::<Point>(None).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("must not be null"));

    assert_eq!(None, marshal::decode_binary::<Point>(None)?);
    assert_eq!(None, marshal::decode_binary::<Point>(Some(&[][..]))?);

    let doc = marshal::encode_text::<Order>(None)?;
    assert!(doc.ends_with(r#"<Order nil="true" />"#));
    assert_eq!(None, marshal::decode_text::<Order>(&doc)?);

    Ok(())
}

#[test]
fn binary_root_of_another_type() -> Result<()> {
    let blob = marshal::encode_binary(Some(&Point { x: 3, y: 4 }))?;
    assert_eq!(None, marshal::decode_binary::<Line>(Some(&blob[..]))?);
    assert_eq!(None, marshal::decode_binary::<Vec<i64>>(Some(&blob[..]))?);
    assert_eq!(None, marshal::decode_binary::<i64>(Some(&blob[..]))?);
    assert_eq!(
        Some(Some(Point { x: 3, y: 4 })),
        marshal::decode_binary::<Option<Point>>(Some(&blob[..]))?
    );

    let blob = marshal::encode_binary(Some(&gen_order()))?;
    assert_eq!(None, marshal::decode_binary::<Option<Point>>(Some(&blob[..]))?);

    Ok(())
}

#[test]
fn text_root_of_another_type() -> Result<()> {
    let doc = marshal::encode_text(Some(&Point { x: 3, y: 4 }))?;
    assert_eq!(None, marshal::decode_text::<Line>(&doc)?);
    assert_eq!(None, marshal::decode_text::<Vec<Point>>(&doc)?);
    assert_eq!(
        Some(Some(Point { x: 3, y: 4 })),
        marshal::decode_text::<Option<Point>>(&doc)?
    );

    /* The prefix of a qualified root name is not compared. */
    let doc = "<m:Point xmlns:m='urn:m'><X>3</X><Y>4</Y></m:Point>";
    assert_eq!(Some(Point { x: 3, y: 4 }), marshal::decode_text::<Point>(doc)?);

    Ok(())
}

#[test]
fn member_of_another_type() -> Result<()> {
    let np = NamedPoint {
        x: String::from("three"),
    };

    let blob = marshal::encode_binary(Some(&np))?;
    let err = marshal::decode_binary::<Point>(Some(&blob[..])).unwrap_err();
    assert!(err.is_decode());
    assert_eq!(Some(np), marshal::decode_binary::<NamedPoint>(Some(&blob[..]))?);

    let doc = "<Point><X>three</X><Y>4</Y></Point>";
    assert!(marshal::decode_text::<Point>(doc).unwrap_err().is_decode());

    Ok(())
}
