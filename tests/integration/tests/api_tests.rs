//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, AUTH_TOKEN_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Portal Tests
// ============================================================================

#[tokio::test]
async fn test_create_portal() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.mint_token("owner-1", "Casey");
    let request = CreatePortalBody::unique();

    let response = server
        .post_auth("/api/v1/portals", &token, &request)
        .await
        .unwrap();
    let portal: PortalBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(portal.title, request.title);
    assert_eq!(portal.created_by, "owner-1");
    assert_eq!(portal.status, "active");
    assert!(portal.resolution_summary.is_none());
    assert!(portal.resolved_at.is_none());
}

#[tokio::test]
async fn test_create_portal_with_initial_status() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.mint_token("owner-1", "Casey");
    let mut request = CreatePortalBody::unique();
    request.status = Some("inactive".to_string());

    let response = server
        .post_auth("/api/v1/portals", &token, &request)
        .await
        .unwrap();
    let portal: PortalBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(portal.status, "inactive");
}

#[tokio::test]
async fn test_create_portal_requires_auth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreatePortalBody::unique();

    let response = server.post("/api/v1/portals", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_missing_portal_returns_404() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get("/api/v1/portals/00000000-0000-0000-0000-000000000000")
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_get_portal_invalid_id_returns_400() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/portals/not-a-uuid").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_search_portals_case_insensitive() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.mint_token("owner-2", "Casey");

    let mut request = CreatePortalBody::unique();
    let marker = format!("NEEDLE{}", unique_suffix());
    request.location = marker.clone();

    let response = server
        .post_auth("/api/v1/portals", &token, &request)
        .await
        .unwrap();
    let portal: PortalBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/api/v1/portals/search?q={}", marker.to_lowercase()))
        .await
        .unwrap();
    let results: Vec<PortalBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(results.iter().any(|p| p.id == portal.id));
}

#[tokio::test]
async fn test_update_portal_owner_only() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.mint_token("owner-3", "Casey");
    let stranger = server.mint_token("stranger-3", "Riley");

    let response = server
        .post_auth("/api/v1/portals", &owner, &CreatePortalBody::unique())
        .await
        .unwrap();
    let portal: PortalBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let patch = UpdatePortalBody {
        title: Some("Updated title".to_string()),
        ..Default::default()
    };

    // A non-owner cannot edit
    let response = server
        .patch_auth(&format!("/api/v1/portals/{}", portal.id), &stranger, &patch)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The owner can
    let response = server
        .patch_auth(&format!("/api/v1/portals/{}", portal.id), &owner, &patch)
        .await
        .unwrap();
    let updated: PortalBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title, "Updated title");
}

#[tokio::test]
async fn test_resolve_portal_records_resolution_update() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.mint_token("owner-4", "Casey");

    let response = server
        .post_auth("/api/v1/portals", &owner, &CreatePortalBody::unique())
        .await
        .unwrap();
    let portal: PortalBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let body = UpdateStatusBody {
        status: "resolved".to_string(),
        resolution_summary: Some("All residents relocated safely".to_string()),
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/portals/{}/status", portal.id),
            &owner,
            &body,
        )
        .await
        .unwrap();
    let resolved: PortalBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(resolved.status, "resolved");
    assert_eq!(
        resolved.resolution_summary.as_deref(),
        Some("All residents relocated safely")
    );
    assert!(resolved.resolved_at.is_some());

    // Exactly one system-generated resolution update on the timeline
    let response = server
        .get(&format!("/api/v1/portals/{}/updates", portal.id))
        .await
        .unwrap();
    let updates: Vec<UpdateBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updates.iter().filter(|u| u.is_resolution).count(), 1);
}

#[tokio::test]
async fn test_delete_portal_cascades() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.mint_token("owner-5", "Casey");
    let helper = server.mint_token("helper-5", "Riley");

    let response = server
        .post_auth("/api/v1/portals", &owner, &CreatePortalBody::unique())
        .await
        .unwrap();
    let portal: PortalBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let base = format!("/api/v1/portals/{}", portal.id);

    // Attach one of everything
    let response = server
        .post_auth(
            &format!("{base}/resources"),
            &owner,
            &CreateResourceBody::unique(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("{base}/volunteers"),
            &helper,
            &RegisterVolunteerBody::unique(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(&format!("{base}/updates"), &owner, &CreateUpdateBody::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(&format!("{base}/posts"), &helper, &CreatePostBody::unique())
        .await
        .unwrap();
    let post: PostBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let comment = CreateCommentBody {
        content: "Thanks for the information".to_string(),
    };
    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/comments", post.id),
            &owner,
            &comment,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Delete and check the reported counts
    let response = server.delete_auth(&base, &owner).await.unwrap();
    let summary: CascadeBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(summary.resources, 1);
    assert_eq!(summary.volunteers, 1);
    assert_eq!(summary.updates, 1);
    assert_eq!(summary.posts, 1);
    assert_eq!(summary.comments, 1);
    assert!(summary.manual_links >= 1);

    // The portal and its children are gone
    let response = server.get(&base).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .get(&format!("/api/v1/posts/{}", post.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_portal_owner_only() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.mint_token("owner-6", "Casey");
    let stranger = server.mint_token("stranger-6", "Riley");

    let response = server
        .post_auth("/api/v1/portals", &owner, &CreatePortalBody::unique())
        .await
        .unwrap();
    let portal: PortalBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/portals/{}", portal.id), &stranger)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Stats Tests
// ============================================================================

#[tokio::test]
async fn test_portal_stats_counts_fulfillment() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.mint_token("owner-7", "Casey");
    let helper = server.mint_token("helper-7", "Riley");

    let response = server
        .post_auth("/api/v1/portals", &owner, &CreatePortalBody::unique())
        .await
        .unwrap();
    let portal: PortalBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let base = format!("/api/v1/portals/{}", portal.id);

    // Three needs of 10 units each; one fulfilled, one half-fulfilled,
    // one still outstanding
    for status in ["fulfilled", "partially_fulfilled", "needed"] {
        let mut request = CreateResourceBody::unique();
        request.quantity = 10;
        let response = server
            .post_auth(&format!("{base}/resources"), &owner, &request)
            .await
            .unwrap();
        let resource: ResourceBody = assert_json(response, StatusCode::CREATED).await.unwrap();

        let patch = UpdateResourceBody {
            status: Some(status.to_string()),
            ..Default::default()
        };
        let response = server
            .patch_auth(&format!("/api/v1/resources/{}", resource.id), &owner, &patch)
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server
        .post_auth(
            &format!("{base}/volunteers"),
            &helper,
            &RegisterVolunteerBody::unique(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.get(&format!("{base}/stats")).await.unwrap();
    let stats: StatsBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(stats.portal_id, portal.id);
    assert_eq!(stats.volunteers, 1);
    assert_eq!(stats.resource_needs, 3);
    assert_eq!(stats.total_resources, 30);
    assert_eq!(stats.resources_fulfilled, 15);
}

#[tokio::test]
async fn test_stats_for_missing_portal_returns_404() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get("/api/v1/portals/00000000-0000-0000-0000-000000000000/stats")
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_multi_stats_preserves_input_order() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.mint_token("owner-8", "Casey");

    let mut ids = Vec::new();
    for _ in 0..3 {
        let response = server
            .post_auth("/api/v1/portals", &owner, &CreatePortalBody::unique())
            .await
            .unwrap();
        let portal: PortalBody = assert_json(response, StatusCode::CREATED).await.unwrap();
        ids.push(portal.id);
    }
    ids.reverse();

    let body = MultiStatsBody {
        portal_ids: ids.clone(),
    };
    let response = server.post("/api/v1/portals/stats", &body).await.unwrap();
    let stats: Vec<StatsBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(stats.len(), ids.len());
    for (stat, id) in stats.iter().zip(&ids) {
        assert_eq!(&stat.portal_id, id);
    }
}

// ============================================================================
// Resource Tests
// ============================================================================

#[tokio::test]
async fn test_resources_ordered_by_priority() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.mint_token("owner-9", "Casey");

    let response = server
        .post_auth("/api/v1/portals", &owner, &CreatePortalBody::unique())
        .await
        .unwrap();
    let portal: PortalBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/portals/{}/resources", portal.id);

    for priority in ["low", "high", "medium"] {
        let response = server
            .post_auth(&path, &owner, &CreateResourceBody::with_priority(priority))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get(&path).await.unwrap();
    let resources: Vec<ResourceBody> = assert_json(response, StatusCode::OK).await.unwrap();

    let priorities: Vec<&str> = resources.iter().map(|r| r.priority.as_str()).collect();
    assert_eq!(priorities, vec!["high", "medium", "low"]);
}

#[tokio::test]
async fn test_create_resource_on_missing_portal_returns_404() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.mint_token("owner-10", "Casey");

    let response = server
        .post_auth(
            "/api/v1/portals/00000000-0000-0000-0000-000000000000/resources",
            &token,
            &CreateResourceBody::unique(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_resource_quantity_must_be_positive() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.mint_token("owner-11", "Casey");

    let response = server
        .post_auth("/api/v1/portals", &owner, &CreatePortalBody::unique())
        .await
        .unwrap();
    let portal: PortalBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let mut request = CreateResourceBody::unique();
    request.quantity = 0;

    let response = server
        .post_auth(
            &format!("/api/v1/portals/{}/resources", portal.id),
            &owner,
            &request,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

// ============================================================================
// Volunteer Tests
// ============================================================================

#[tokio::test]
async fn test_duplicate_volunteer_registration_conflicts() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.mint_token("owner-12", "Casey");
    let helper = server.mint_token("helper-12", "Riley");

    let response = server
        .post_auth("/api/v1/portals", &owner, &CreatePortalBody::unique())
        .await
        .unwrap();
    let portal: PortalBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/portals/{}/volunteers", portal.id);

    let response = server
        .post_auth(&path, &helper, &RegisterVolunteerBody::unique())
        .await
        .unwrap();
    let volunteer: VolunteerBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(volunteer.user_id, "helper-12");
    assert_eq!(volunteer.status, "active");

    let response = server
        .post_auth(&path, &helper, &RegisterVolunteerBody::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_my_volunteer_activities() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.mint_token("owner-13", "Casey");
    let helper = server.mint_token("helper-13", "Riley");

    let response = server
        .post_auth("/api/v1/portals", &owner, &CreatePortalBody::unique())
        .await
        .unwrap();
    let portal: PortalBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/portals/{}/volunteers", portal.id),
            &helper,
            &RegisterVolunteerBody::unique(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/v1/users/@me/volunteers", &helper)
        .await
        .unwrap();
    let activities: Vec<VolunteerBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(activities.iter().any(|v| v.portal_id == portal.id));
}

// ============================================================================
// Update Tests
// ============================================================================

#[tokio::test]
async fn test_only_owner_can_post_updates() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.mint_token("owner-14", "Casey");
    let stranger = server.mint_token("stranger-14", "Riley");

    let response = server
        .post_auth("/api/v1/portals", &owner, &CreatePortalBody::unique())
        .await
        .unwrap();
    let portal: PortalBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/portals/{}/updates", portal.id);

    let response = server
        .post_auth(&path, &stranger, &CreateUpdateBody::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_auth(&path, &owner, &CreateUpdateBody::unique())
        .await
        .unwrap();
    let update: UpdateBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(update.created_by, "owner-14");
    assert!(!update.is_resolution);
}

// ============================================================================
// Forum Tests
// ============================================================================

#[tokio::test]
async fn test_forum_post_and_comment_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.mint_token("owner-15", "Casey");
    let helper = server.mint_token("helper-15", "Riley");

    let response = server
        .post_auth("/api/v1/portals", &owner, &CreatePortalBody::unique())
        .await
        .unwrap();
    let portal: PortalBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/portals/{}/posts", portal.id),
            &helper,
            &CreatePostBody::unique(),
        )
        .await
        .unwrap();
    let post: PostBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(post.user_id, "helper-15");
    assert_eq!(post.user_name, "Riley");

    let comment = CreateCommentBody {
        content: "Is the shelter wheelchair accessible?".to_string(),
    };
    let response = server
        .post_auth(&format!("/api/v1/posts/{}/comments", post.id), &owner, &comment)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/api/v1/posts/{}/comments", post.id))
        .await
        .unwrap();
    let comments: Vec<CommentBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].user_name, "Casey");
}

#[tokio::test]
async fn test_comment_on_missing_post_returns_404() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.mint_token("user-16", "Casey");

    let comment = CreateCommentBody {
        content: "Hello".to_string(),
    };
    let response = server
        .post_auth(
            "/api/v1/posts/00000000-0000-0000-0000-000000000000/comments",
            &token,
            &comment,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Manual Tests
// ============================================================================

#[tokio::test]
async fn test_manuals_by_type_seeds_defaults() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/manuals/types/earthquake").await.unwrap();
    let manuals: Vec<ManualBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(manuals.len() >= 2);
    assert!(manuals.iter().any(|m| m.for_victims));
    assert!(manuals.iter().any(|m| m.for_helpers));
    assert!(manuals.iter().all(|m| m.disaster_type == "earthquake"));
}

#[tokio::test]
async fn test_portal_manuals_attached_on_creation() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.mint_token("owner-17", "Casey");

    let response = server
        .post_auth(
            "/api/v1/portals",
            &owner,
            &CreatePortalBody::with_disaster_type("fire"),
        )
        .await
        .unwrap();
    let portal: PortalBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/api/v1/portals/{}/manuals", portal.id))
        .await
        .unwrap();
    let manuals: Vec<ManualBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!manuals.is_empty());
    assert!(manuals.iter().all(|m| m.disaster_type == "fire"));
}

#[tokio::test]
async fn test_create_and_get_manual() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.mint_token("author-18", "Casey");
    let request = CreateManualBody::unique("cyclone");

    let response = server
        .post_auth("/api/v1/manuals", &token, &request)
        .await
        .unwrap();
    let manual: ManualBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(manual.created_by, "author-18");

    let response = server
        .get(&format!("/api/v1/manuals/{}", manual.id))
        .await
        .unwrap();
    let fetched: ManualBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.title, request.title);
}

#[tokio::test]
async fn test_invalid_disaster_type_returns_400() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/manuals/types/volcano-storm").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_my_portals() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.mint_token("owner-19", "Casey");

    let response = server
        .post_auth("/api/v1/portals", &owner, &CreatePortalBody::unique())
        .await
        .unwrap();
    let portal: PortalBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth("/api/v1/users/@me/portals", &owner).await.unwrap();
    let portals: Vec<PortalBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(portals.iter().any(|p| p.id == portal.id));
    assert!(portals.iter().all(|p| p.created_by == "owner-19"));
}
