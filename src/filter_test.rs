use super::*;
use proptest::prelude::*;

fn make_book(id: &str, title: &str, author: &str, genres: &[&str]) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        image: format!("{}.jpg", id),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        description: String::new(),
        published: String::new(),
    }
}

fn fixture() -> Vec<Book> {
    vec![
        make_book("b1", "Dune", "a1", &["g1"]),
        make_book("b2", "Dune Messiah", "a1", &["g1", "g2"]),
        make_book("b3", "The Left Hand of Darkness", "a2", &["g1"]),
        make_book("b4", "A Wizard of Earthsea", "a2", &["g2"]),
    ]
}

fn ids(books: &[Book], indices: &[usize]) -> Vec<String> {
    indices.iter().map(|&i| books[i].id.clone()).collect()
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn selection_parse_any_sentinel() {
    assert_eq!(Selection::parse(Some("any")), Selection::Any);
    assert_eq!(Selection::parse(Some("")), Selection::Any);
    assert_eq!(Selection::parse(Some("   ")), Selection::Any);
    assert_eq!(Selection::parse(None), Selection::Any);
}

#[test]
fn selection_parse_keeps_id_verbatim() {
    assert_eq!(
        Selection::parse(Some(" a1 ")),
        Selection::Only(" a1 ".to_string())
    );
    assert_eq!(Selection::parse(Some(" any ")), Selection::Any);
}

#[test]
fn padded_author_id_matches_nothing() {
    let books = fixture();
    let criteria = FilterCriteria::from_form(&FormData::new().with("author", " a1 "));
    assert!(filter_books(&books, &criteria).is_empty());
}

#[test]
fn selection_parse_id() {
    assert_eq!(
        Selection::parse(Some("a1")),
        Selection::Only("a1".to_string())
    );
    assert_eq!(Selection::Only("a1".to_string()).as_value(), "a1");
    assert_eq!(Selection::Any.as_value(), "any");
}

// ============================================================================
// 個別の条件
// ============================================================================

#[test]
fn title_empty_or_whitespace_matches_everything() {
    let books = fixture();
    for title in ["", "   "] {
        let criteria = FilterCriteria {
            title: title.to_string(),
            ..FilterCriteria::any()
        };
        assert!(books.iter().all(|b| criteria.title_matches(b)));
    }
}

#[test]
fn title_is_case_insensitive_substring() {
    let books = fixture();
    let criteria = FilterCriteria {
        title: "dUNE".to_string(),
        ..FilterCriteria::any()
    };
    assert_eq!(ids(&books, &filter_books(&books, &criteria)), vec!["b1", "b2"]);
}

#[test]
fn author_filter_in_isolation() {
    let books = fixture();
    let criteria = FilterCriteria {
        author: Selection::Only("a2".to_string()),
        ..FilterCriteria::any()
    };
    assert_eq!(ids(&books, &filter_books(&books, &criteria)), vec!["b3", "b4"]);
}

#[test]
fn genre_filter_in_isolation() {
    let books = fixture();
    let criteria = FilterCriteria {
        genre: Selection::Only("g2".to_string()),
        ..FilterCriteria::any()
    };
    assert_eq!(ids(&books, &filter_books(&books, &criteria)), vec!["b2", "b4"]);
}

#[test]
fn all_conditions_must_hold() {
    let books = fixture();
    let criteria = FilterCriteria {
        title: "dune".to_string(),
        author: Selection::Only("a1".to_string()),
        genre: Selection::Only("g2".to_string()),
    };
    assert_eq!(ids(&books, &filter_books(&books, &criteria)), vec!["b2"]);
}

#[test]
fn unknown_ids_match_nothing() {
    let books = fixture();
    let criteria = FilterCriteria {
        author: Selection::Only("nobody".to_string()),
        ..FilterCriteria::any()
    };
    assert!(filter_books(&books, &criteria).is_empty());
}

#[test]
fn filtering_does_not_touch_dataset() {
    let books = fixture();
    let before = books.clone();
    let criteria = FilterCriteria {
        title: "earthsea".to_string(),
        ..FilterCriteria::any()
    };
    let _ = filter_books(&books, &criteria);
    assert_eq!(books, before);
}

// ============================================================================
// フォーム変換
// ============================================================================

#[test]
fn from_form_reads_fields() {
    let form = FormData::new()
        .with("title", "Dune")
        .with("author", "a1")
        .with("genre", "any");
    let criteria = FilterCriteria::from_form(&form);
    assert_eq!(criteria.title, "Dune");
    assert_eq!(criteria.author, Selection::Only("a1".to_string()));
    assert_eq!(criteria.genre, Selection::Any);
}

#[test]
fn from_form_coerces_missing_fields() {
    let criteria = FilterCriteria::from_form(&FormData::new());
    assert_eq!(criteria, FilterCriteria::any());
}

#[test]
fn to_form_and_back() {
    let criteria = FilterCriteria {
        title: "sea".to_string(),
        author: Selection::Only("a2".to_string()),
        genre: Selection::Any,
    };
    assert_eq!(FilterCriteria::from_form(&criteria.to_form()), criteria);
}

// ============================================================================
// プロパティ
// ============================================================================

fn book_strategy() -> impl Strategy<Value = Book> {
    (
        "[a-z]{1,4}",
        "[A-Za-z ]{0,12}",
        prop::sample::select(vec!["a1", "a2", "a3"]),
        prop::collection::vec(prop::sample::select(vec!["g1", "g2", "g3"]), 0..3),
    )
        .prop_map(|(id, title, author, genres)| make_book(&id, &title, author, &genres))
}

fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
    let selection = |ids: Vec<&'static str>| {
        prop_oneof![
            Just(Selection::Any),
            prop::sample::select(ids).prop_map(|id| Selection::Only(id.to_string())),
        ]
    };
    (
        "[A-Za-z ]{0,4}",
        selection(vec!["a1", "a2", "a3"]),
        selection(vec!["g1", "g2", "g3"]),
    )
        .prop_map(|(title, author, genre)| FilterCriteria {
            title,
            author,
            genre,
        })
}

proptest! {
    /// any/any/空タイトルは恒等フィルタ
    #[test]
    fn prop_identity_filter_keeps_all(books in prop::collection::vec(book_strategy(), 0..20)) {
        let result = filter_books(&books, &FilterCriteria::any());
        prop_assert_eq!(result, (0..books.len()).collect::<Vec<_>>());
    }

    /// 総合判定は 3 条件の論理積
    #[test]
    fn prop_matches_all_of_is_conjunction(book in book_strategy(), criteria in criteria_strategy()) {
        let expected = criteria.title_matches(&book)
            && criteria.author_matches(&book)
            && criteria.genre_matches(&book);
        prop_assert_eq!(criteria.matches_all_of(&book), expected);
    }

    /// 結果は元の相対順序を保つ部分列
    #[test]
    fn prop_result_preserves_order(
        books in prop::collection::vec(book_strategy(), 0..20),
        criteria in criteria_strategy()
    ) {
        let result = filter_books(&books, &criteria);
        prop_assert!(result.windows(2).all(|w| w[0] < w[1]));
        for i in result {
            prop_assert!(criteria.matches_all_of(&books[i]));
        }
    }
}
