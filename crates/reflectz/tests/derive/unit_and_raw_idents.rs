use reflectz::{Reflect, Record};

#[derive(Reflect)]
pub struct Marker;

#[derive(Reflect)]
pub struct Keywords {
    #[tags(json = "type,omitempty")]
    pub r#type: String,
    pub r#match: bool,
}

pub fn main() {
    assert!(Marker.fields().is_empty());

    let keywords = Keywords {
        r#type: "a".to_string(),
        r#match: true,
    };
    assert_eq!(keywords.record_name(), "Keywords");
    let names: Vec<_> = keywords.fields().iter().map(|f| f.ident).collect();
    assert_eq!(names, ["type", "match"]);
}
