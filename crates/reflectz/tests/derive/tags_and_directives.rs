use reflectz::{Config, Reflect, inspect_with};

#[derive(Reflect, Default)]
pub struct Inner {
    pub a: i32,
}

#[derive(Reflect, Default)]
pub struct Outer {
    #[tags(json = "first", db = "col_first")]
    pub first: Inner,
    #[reflectz(nodive)]
    pub second: Inner,
    #[tags(json = "-")]
    #[reflectz(skip)]
    pub third: Inner,
}

pub fn main() {
    let config = Config::builder().naming_tag("json").build();
    let fields = inspect_with(&Outer::default(), &config).unwrap();
    let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["first_a", "second"]);
    assert_eq!(fields[1].tags.get("reflectz"), "nodive");
}
