use super::*;
use std::collections::BTreeMap;

fn catalog() -> Rc<Catalog> {
    let authors = BTreeMap::from([
        ("a1".to_string(), "Frank Herbert".to_string()),
        ("a2".to_string(), "Ursula K. Le Guin".to_string()),
    ]);
    Rc::new(Catalog::new(vec![], authors, BTreeMap::new(), 12).unwrap())
}

fn dune_element(catalog: &Rc<Catalog>) -> PreviewElement {
    let mut element = Element::new(BookPreview::new(Rc::clone(catalog)));
    element.set_attribute("id", "b1");
    element.set_attribute("title", "Dune");
    element.set_attribute("author", "a1");
    element.set_attribute("image", "dune.jpg");
    element
}

#[test]
fn resolves_author_name() {
    let element = dune_element(&catalog());
    assert_eq!(element.markup().author, "Frank Herbert");
    assert_eq!(element.markup().title, "Dune");
    assert_eq!(element.markup().image, "dune.jpg");
}

#[test]
fn changing_title_leaves_other_fields() {
    let mut element = dune_element(&catalog());
    element.set_attribute("title", "Dune Messiah");

    let markup = element.markup();
    assert_eq!(markup.title, "Dune Messiah");
    assert_eq!(markup.image, "dune.jpg");
    assert_eq!(markup.author, "Frank Herbert");
    assert_eq!(markup.preview, "b1");
}

#[test]
fn unknown_author_shows_raw_id() {
    let mut element = dune_element(&catalog());
    element.set_attribute("author", "ghost");
    assert_eq!(element.markup().author, "ghost");
}

#[test]
fn exposes_preview_hook() {
    let element = dune_element(&catalog());
    assert_eq!(element.data_preview(), Some("b1"));
}

#[test]
fn missing_id_has_no_hook() {
    let element = Element::new(BookPreview::new(catalog()));
    assert_eq!(element.data_preview(), None);
}

#[test]
fn unobserved_attribute_does_not_rerender() {
    let mut element = dune_element(&catalog());
    let before = element.renders();
    element.set_attribute("class", "preview");
    assert_eq!(element.renders(), before);
    assert_eq!(element.get_attribute("class"), Some("preview"));
}

#[test]
fn same_value_does_not_rerender() {
    let mut element = dune_element(&catalog());
    let before = element.renders();
    element.set_attribute("title", "Dune");
    assert_eq!(element.renders(), before);
}

#[test]
fn attach_renders_and_is_idempotent() {
    let catalog = catalog();
    let mut element = dune_element(&catalog);
    assert!(!element.is_connected());
    let before = element.markup().clone();

    element.attach();
    assert!(element.is_connected());
    assert_eq!(element.markup(), &before);

    element.attach();
    assert_eq!(element.markup(), &before);
}

#[test]
fn for_book_builds_connected_element() {
    let catalog = catalog();
    let book = Book {
        id: "b2".to_string(),
        title: "The Dispossessed".to_string(),
        author: "a2".to_string(),
        image: "dispossessed.jpg".to_string(),
        genres: vec![],
        description: String::new(),
        published: String::new(),
    };
    let element = PreviewElement::for_book(&catalog, &book);
    assert!(element.is_connected());
    assert_eq!(element.data_preview(), Some("b2"));
    assert_eq!(element.markup().author, "Ursula K. Le Guin");
    assert_eq!(element.get_attribute("image"), Some("dispossessed.jpg"));
}
