use anyhow::Result;
use marshal::{ByteBuf, Datum, Deser, Record, RecordShape, Ser, Shape, Shaped};

#[derive(PartialEq, Clone, Debug)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}
impl Shaped for Point {
    fn shape() -> Shape {
        Shape::Record(RecordShape::new("Point").field::<i64>("X").field::<i64>("Y"))
    }
}
impl Ser for Point {
    fn to_datum(&self) -> Result<Datum> {
        let rec = Record::new("Point").with("X", &self.x)?.with("Y", &self.y)?;
        Ok(Datum::Record(rec))
    }
}
impl Deser for Point {
    fn from_datum(dat: Datum) -> Result<Self> {
        let mut rec = Record::expect(dat, "Point")?;
        Ok(Self {
            x: rec.take("X")?,
            y: rec.take("Y")?,
        })
    }
}

#[derive(PartialEq, Clone, Debug)]
pub struct Line {
    pub sku: String,
    pub qty: i32,
}
impl Shaped for Line {
    fn shape() -> Shape {
        Shape::Record(RecordShape::new("Line").field::<String>("Sku").field::<i32>("Qty"))
    }
}
impl Ser for Line {
    fn to_datum(&self) -> Result<Datum> {
        let rec = Record::new("Line")
            .with("Sku", &self.sku)?
            .with("Qty", &self.qty)?;
        Ok(Datum::Record(rec))
    }
}
impl Deser for Line {
    fn from_datum(dat: Datum) -> Result<Self> {
        let mut rec = Record::expect(dat, "Line")?;
        Ok(Self {
            sku: rec.take("Sku")?,
            qty: rec.take("Qty")?,
        })
    }
}

/// Exercises every kind of member.
#[derive(PartialEq, Clone, Debug)]
pub struct Order {
    pub id: u32,
    pub customer: String,
    pub total: f64,
    pub paid: bool,
    pub lines: Vec<Line>,
    pub note: Option<String>,
    pub receipt: ByteBuf,
    pub discounts: Vec<Option<i64>>,
    pub origin: Option<Point>,
}
impl Shaped for Order {
    fn shape() -> Shape {
        Shape::Record(
            RecordShape::new("Order")
                .field::<u32>("Id")
                .field::<String>("Customer")
                .field::<f64>("Total")
                .field::<bool>("Paid")
                .field::<Vec<Line>>("Lines")
                .field::<Option<String>>("Note")
                .field::<ByteBuf>("Receipt")
                .field::<Vec<Option<i64>>>("Discounts")
                .field::<Option<Point>>("Origin"),
        )
    }
}
impl Ser for Order {
    fn to_datum(&self) -> Result<Datum> {
        let rec = Record::new("Order")
            .with("Id", &self.id)?
            .with("Customer", &self.customer)?
            .with("Total", &self.total)?
            .with("Paid", &self.paid)?
            .with("Lines", &self.lines)?
            .with("Note", &self.note)?
            .with("Receipt", &self.receipt)?
            .with("Discounts", &self.discounts)?
            .with("Origin", &self.origin)?;
        Ok(Datum::Record(rec))
    }
}
impl Deser for Order {
    fn from_datum(dat: Datum) -> Result<Self> {
        let mut rec = Record::expect(dat, "Order")?;
        Ok(Self {
            id: rec.take("Id")?,
            customer: rec.take("Customer")?,
            total: rec.take("Total")?,
            paid: rec.take("Paid")?,
            lines: rec.take("Lines")?,
            note: rec.take("Note")?,
            receipt: rec.take("Receipt")?,
            discounts: rec.take("Discounts")?,
            origin: rec.take("Origin")?,
        })
    }
}

pub fn gen_order() -> Order {
    Order {
        id: 42,
        customer: String::from("Ann <ann@example.com> & co."),
        total: 19.95,
        paid: true,
        lines: vec![
            Line {
                sku: String::from("A-1"),
                qty: 2,
            },
            Line {
                sku: String::from("  padded\t"),
                qty: -1,
            },
        ],
        note: None,
        receipt: ByteBuf(vec![0x00, 0x7f, 0xff]),
        discounts: vec![Some(5), None, Some(-3)],
        origin: Some(Point { x: 3, y: 4 }),
    }
}

/// A record that contains itself.
#[derive(PartialEq, Clone, Debug)]
pub struct Tree {
    pub label: String,
    pub kids: Vec<Tree>,
}
impl Shaped for Tree {
    fn shape() -> Shape {
        Shape::Record(
            RecordShape::new("Tree")
                .field::<String>("Label")
                .field::<Vec<Tree>>("Kids"),
        )
    }
}
impl Ser for Tree {
    fn to_datum(&self) -> Result<Datum> {
        let rec = Record::new("Tree")
            .with("Label", &self.label)?
            .with("Kids", &self.kids)?;
        Ok(Datum::Record(rec))
    }
}
impl Deser for Tree {
    fn from_datum(dat: Datum) -> Result<Self> {
        let mut rec = Record::expect(dat, "Tree")?;
        Ok(Self {
            label: rec.take("Label")?,
            kids: rec.take("Kids")?,
        })
    }
}

/// A chain of `levels` trees. Each level adds two to the nesting depth.
pub fn gen_chain(levels: usize) -> Tree {
    let mut tree = Tree {
        label: String::from("leaf"),
        kids: vec![],
    };
    for i in 1..levels {
        tree = Tree {
            label: format!("level {}", i),
            kids: vec![tree],
        };
    }
    tree
}
