use crate::LabelList;

use googletest::prelude::*;

#[test]
fn given_remote_names_when_built_then_joined_with_commas() {
    let labels = LabelList::from_names(["bug", "p2p"]);

    assert_that!(labels.to_db_string(), eq("bug,p2p"));
}

#[test]
fn given_name_containing_delimiter_when_built_then_delimiter_is_replaced() {
    let labels = LabelList::from_names(["Needs review, urgent", "docs"]);

    assert_that!(labels.names().len(), eq(2));
    assert_that!(labels.names()[0].as_str(), eq("Needs review  urgent"));
    assert_that!(
        LabelList::from_db_string(&labels.to_db_string()),
        eq(&labels)
    );
}

#[test]
fn given_empty_column_when_parsed_then_list_is_empty() {
    assert!(LabelList::from_db_string("").is_empty());
    assert!(LabelList::from_db_string(",,").is_empty());
}

#[test]
fn given_labels_when_matching_substring_then_behaves_like_list_filter() {
    let first = LabelList::from_db_string("bug,p2p");
    let second = LabelList::from_db_string("docs");

    assert!(first.contains_substring("bug"));
    assert!(!second.contains_substring("bug"));
    assert!(first.contains_substring("p2"));
}
