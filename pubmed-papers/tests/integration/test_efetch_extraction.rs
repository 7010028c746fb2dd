//! Record extraction from EFetch XML fixtures

mod common;

use common::{THREE_ARTICLE_PMIDS, efetch_fixture};
use pubmed_papers::{PLACEHOLDER, PubMedError, parse_records_from_xml};
use rstest::rstest;

#[test]
fn test_record_count_matches_article_count() {
    let xml = efetch_fixture("three_articles.xml");
    let article_count = xml.matches("<PubmedArticle>").count();

    let records = parse_records_from_xml(&xml).unwrap();
    assert_eq!(records.len(), article_count);

    let pmids: Vec<&str> = records.iter().map(|r| r.pubmed_id.as_str()).collect();
    assert_eq!(pmids, THREE_ARTICLE_PMIDS);
}

#[test]
fn test_doctype_and_pubmed_data_are_ignored() {
    let records = parse_records_from_xml(&efetch_fixture("three_articles.xml")).unwrap();

    // PubmedData/ArticleIdList must not overwrite the MedlineCitation PMID
    assert_eq!(records[0].pubmed_id, "31978945");
    assert!(records[0].has_abstract());
    assert!(records[0].abstract_text.starts_with("In December 2019"));
}

#[test]
fn test_truncated_fixture_is_rejected() {
    let err = parse_records_from_xml(&efetch_fixture("truncated.xml")).unwrap_err();
    assert!(matches!(err, PubMedError::XmlError(_)));
}

#[rstest]
#[case(1)]
#[case(5)]
#[case(10)]
fn test_generated_article_sets(#[case] count: usize) {
    let articles: String = (0..count)
        .map(|i| {
            format!(
                "<PubmedArticle><MedlineCitation><PMID>{pmid}</PMID><Article>\
                 <ArticleTitle>Title {i}</ArticleTitle>\
                 <AuthorList><Author><LastName>Last{i}</LastName><ForeName>First{i}</ForeName></Author></AuthorList>\
                 </Article></MedlineCitation></PubmedArticle>",
                pmid = 1000 + i,
                i = i
            )
        })
        .collect();
    let xml = format!("<PubmedArticleSet>{}</PubmedArticleSet>", articles);

    let records = parse_records_from_xml(&xml).unwrap();
    assert_eq!(records.len(), count);

    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.pubmed_id, (1000 + i).to_string());
        assert_eq!(record.title, format!("Title {}", i));
        assert_eq!(record.authors, format!("First{} Last{}", i, i));
        assert_eq!(record.abstract_text, PLACEHOLDER);
    }
}
