//! Controller API operations and how each maps onto an HTTP request.

use std::fmt;

use serde_json::{json, Value};

/// HTTP verbs the controller API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        };
        f.write_str(verb)
    }
}

/// One request against the controller API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Status,
    ListNetworks,
    ShowNetwork {
        network_id: String,
    },
    ListMembers {
        network_id: String,
    },
    ShowMember {
        network_id: String,
        member_id: String,
    },
    DeleteMember {
        network_id: String,
        member_id: String,
    },
    AuthorizeMember {
        network_id: String,
        member_id: String,
        enable: bool,
    },
}

impl Operation {
    pub fn method(&self) -> Method {
        match self {
            Operation::DeleteMember { .. } => Method::Delete,
            Operation::AuthorizeMember { .. } => Method::Post,
            _ => Method::Get,
        }
    }

    /// Path relative to the API base URL, always starting with `/`.
    pub fn path(&self) -> String {
        match self {
            Operation::Status => "/status".to_string(),
            Operation::ListNetworks => "/controller/network".to_string(),
            Operation::ShowNetwork { network_id } => format!("/controller/network/{network_id}"),
            Operation::ListMembers { network_id } => {
                format!("/controller/network/{network_id}/member")
            }
            Operation::ShowMember {
                network_id,
                member_id,
            }
            | Operation::DeleteMember {
                network_id,
                member_id,
            }
            | Operation::AuthorizeMember {
                network_id,
                member_id,
                ..
            } => format!("/controller/network/{network_id}/member/{member_id}"),
        }
    }

    /// JSON request body, if the operation sends one.
    ///
    /// Only `authorized` is ever written; every other member field is left to the daemon.
    pub fn body(&self) -> Option<Value> {
        match self {
            Operation::AuthorizeMember { enable, .. } => Some(json!({ "authorized": enable })),
            _ => None,
        }
    }

    /// Whether the operation changes state on the controller.
    pub fn is_write(&self) -> bool {
        self.method() != Method::Get
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member_op(enable: bool) -> Operation {
        Operation::AuthorizeMember {
            network_id: "net123".into(),
            member_id: "memberABC".into(),
            enable,
        }
    }

    #[test]
    fn given_read_operations_when_mapped_then_use_get_without_body() {
        let ops = [
            Operation::Status,
            Operation::ListNetworks,
            Operation::ShowNetwork {
                network_id: "n".into(),
            },
            Operation::ListMembers {
                network_id: "n".into(),
            },
            Operation::ShowMember {
                network_id: "n".into(),
                member_id: "m".into(),
            },
        ];
        for op in ops {
            assert_eq!(op.method(), Method::Get, "{op:?}");
            assert!(op.body().is_none(), "{op:?}");
            assert!(!op.is_write());
        }
    }

    #[test]
    fn given_authorize_when_mapped_then_posts_authorized_flag() {
        let op = member_op(true);
        assert_eq!(op.method(), Method::Post);
        assert_eq!(op.path(), "/controller/network/net123/member/memberABC");
        assert_eq!(op.body(), Some(json!({ "authorized": true })));
    }

    #[test]
    fn given_deauthorize_when_mapped_then_posts_false() {
        assert_eq!(member_op(false).body(), Some(json!({ "authorized": false })));
    }

    #[test]
    fn given_delete_when_mapped_then_uses_member_path() {
        let op = Operation::DeleteMember {
            network_id: "net123".into(),
            member_id: "memberABC".into(),
        };
        assert_eq!(op.method(), Method::Delete);
        assert_eq!(op.path(), "/controller/network/net123/member/memberABC");
        assert!(op.body().is_none());
        assert!(op.is_write());
    }

    #[test]
    fn given_method_when_displayed_then_is_uppercase_verb() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }
}
