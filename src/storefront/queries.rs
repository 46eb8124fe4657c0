//! GraphQL query documents for the Storefront API.
//!
//! Every query pages through a connection with `first`/`after` and asks for
//! `pageInfo { hasNextPage endCursor }` so the fetcher can drive the cursor.

pub const ARTICLES_QUERY: &str = r#"
query Articles($first: Int!, $after: String) {
  articles(first: $first, after: $after) {
    pageInfo {
      hasNextPage
      endCursor
    }
    nodes {
      id
      title
      handle
      content
      excerpt
      publishedAt
      tags
      image {
        url
        altText
      }
      blog {
        handle
      }
      authorV2 {
        name
      }
    }
  }
}
"#;

pub const PAGES_QUERY: &str = r#"
query Pages($first: Int!, $after: String) {
  pages(first: $first, after: $after) {
    pageInfo {
      hasNextPage
      endCursor
    }
    nodes {
      id
      title
      handle
      body
      bodySummary
      createdAt
      updatedAt
    }
  }
}
"#;

pub const METAOBJECTS_QUERY: &str = r#"
query Metaobjects($type: String!, $first: Int!, $after: String) {
  metaobjects(type: $type, first: $first, after: $after) {
    pageInfo {
      hasNextPage
      endCursor
    }
    nodes {
      id
      handle
      type
      updatedAt
      fields {
        key
        value
        reference {
          __typename
          ... on MediaImage {
            image {
              url
              altText
            }
          }
          ... on GenericFile {
            url
            mimeType
          }
          ... on Metaobject {
            id
            handle
          }
        }
      }
    }
  }
}
"#;
