//! Compound document example

use jsonapi_core::{
    decoder::decode_document,
    encoder::encode_document_pretty,
    linker::analyze_linkage,
    types::{Document, JsonApiObject, ResourceObject},
    Link,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("JSON:API Compound Document Example\n");

    // An article whose author and comments ship as included resources
    let article = ResourceObject::new("articles", "1")
        .with_attribute("title", "JSON:API paints my bikeshed!")
        .with_relationship("author", Document::one(ResourceObject::new("people", "9")))
        .with_relationship(
            "comments",
            Document::many(vec![
                ResourceObject::new("comments", "5"),
                ResourceObject::new("comments", "12"),
            ]),
        );

    let included = vec![
        ResourceObject::new("people", "9").with_attribute("firstName", "Dan"),
        ResourceObject::new("comments", "5")
            .with_attribute("body", "First!")
            .with_relationship("author", Document::one(ResourceObject::new("people", "2"))),
        ResourceObject::new("comments", "12")
            .with_attribute("body", "I like XML better")
            .with_relationship("author", Document::one(ResourceObject::new("people", "9"))),
    ];

    let mut document = Document::one(article)
        .with_included(included)
        .with_links(Link::to_self("http://example.com/articles/1"));
    document.jsonapi = Some(JsonApiObject::current());
    document.check()?;

    let encoded = encode_document_pretty(&document)?;
    println!("{}\n", String::from_utf8_lossy(&encoded));

    // Decode it back and check that every included resource is reachable
    let mut decoded = decode_document(&encoded)?;
    let stats = analyze_linkage(&decoded).stats();
    println!(
        "Included: {}, reachable: {}, orphans: {}, external: {}",
        stats.included, stats.reachable, stats.orphans, stats.external
    );

    decoded.verify_full_linkage(true)?;
    let author = &decoded.primary_resources()[0].relationships["author"].primary_resources()[0];
    println!("Aliased author: {:?}", author.attributes.get("firstName"));

    Ok(())
}
