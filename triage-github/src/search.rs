//! Search query and response parsing
//!
//! The query text is fixed; the only substitutable part is the search-filter
//! string bound to `$target`. Pagination is not followed: the first 100 edges
//! are all this tool ever looks at.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::model::{Item, ItemKind, Repository};
use crate::{Error, Result};

/// GraphQL document sent through `gh api graphql`
pub(crate) const SEARCH_QUERY: &str = r#"
query($target: String!) {
  search(first: 100, type: ISSUE, query: $target) {
    issueCount
    pageInfo {
      hasNextPage
      endCursor
    }
    edges {
      node {
        __typename
        ... on Issue {
          createdAt
          title
          url
          bodyText
          repository {
            owner {
              __typename
              ... on Organization {
                name
              }
              ... on User {
                login
              }
            }
            name
          }
        }
        ... on PullRequest {
          createdAt
          title
          url
          bodyText
          repository {
            owner {
              __typename
              ... on Organization {
                name
              }
              ... on User {
                login
              }
            }
            name
          }
        }
      }
    }
  }
}
"#;

/// Ordered items from one search invocation
#[derive(Debug)]
pub struct SearchResults {
    /// Items in edge order
    pub items: Vec<Item>,
    /// Total match count reported by the server (may exceed `items.len()`)
    pub issue_count: u64,
}

/// GraphQL query response wrapper
#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

/// GraphQL error
#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct SearchData {
    search: SearchConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchConnection {
    #[serde(default)]
    issue_count: u64,
    #[serde(default)]
    page_info: Option<PageInfo>,
    #[serde(default)]
    edges: Vec<Option<Edge>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_next_page: bool,
}

/// Pagination wrapper; the node itself may be null
#[derive(Debug, Deserialize)]
struct Edge {
    node: Option<Value>,
}

/// Fields common to issue and pull-request nodes
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    created_at: String,
    title: String,
    url: String,
    #[serde(default)]
    body_text: String,
    repository: Repository,
}

/// Parse a raw search response into ordered items
///
/// Null edges and null nodes are skipped without disturbing the relative
/// order of the survivors. Any malformed node aborts the whole parse; a
/// partial item list is never returned.
pub(crate) fn parse_search_response(raw: &str) -> Result<SearchResults> {
    let resp: GraphQlResponse<SearchData> = serde_json::from_str(raw)
        .map_err(|e| Error::Parse(format!("malformed search response: {}", e)))?;

    if let Some(errors) = resp.errors {
        if !errors.is_empty() {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(Error::Other(format!(
                "GraphQL errors: {}",
                messages.join(", ")
            )));
        }
    }

    let search = resp
        .data
        .ok_or_else(|| Error::Other("search response missing data".to_string()))?
        .search;

    if search.page_info.as_ref().is_some_and(|p| p.has_next_page) {
        warn!(
            issue_count = search.issue_count,
            "search matched more than one page; only the first 100 results are shown"
        );
    }

    let mut items = Vec::new();
    for edge in search.edges.into_iter().flatten() {
        let Some(node) = edge.node else {
            continue;
        };
        items.push(parse_node(&node)?);
    }

    Ok(SearchResults {
        items,
        issue_count: search.issue_count,
    })
}

fn parse_node(node: &Value) -> Result<Item> {
    let typename = node
        .get("__typename")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::Parse(format!("search node missing __typename: {}", node)))?;

    let kind = match typename {
        "Issue" => ItemKind::Issue,
        "PullRequest" => ItemKind::PullRequest,
        other => {
            return Err(Error::UnexpectedType(format!("{} in {}", other, node)));
        }
    };

    let raw: RawNode = serde_json::from_value(node.clone())
        .map_err(|e| Error::Parse(format!("unexpected node payload {}: {}", node, e)))?;

    Ok(Item {
        kind,
        created_at: raw.created_at,
        title: raw.title,
        url: raw.url,
        body: raw.body_text,
        repo: raw.repository,
    })
}
