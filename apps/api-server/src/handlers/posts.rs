//! Blog post handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use folio_core::domain::{BlogPost, PostFilter, PostInput, SortOrder};
use folio_shared::ApiResponse;
use folio_shared::dto::{ListPostsQuery, PostPayload, PostResponse, SearchQuery};

use crate::middleware::auth::AdminAccess;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: BlogPost) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        slug: post.slug,
        excerpt: post.excerpt,
        category: post.category.as_str().to_string(),
        date: post.date,
        read_time: post.read_time,
        author: post.author,
        image: post.image,
        tags: post.tags,
        featured: post.featured,
        content: post.content,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

fn to_input(payload: PostPayload) -> PostInput {
    PostInput {
        title: payload.title,
        excerpt: payload.excerpt,
        category: payload.category,
        date: payload.date,
        read_time: payload.read_time,
        author: payload.author,
        image: payload.image,
        tags: payload.tags,
        featured: payload.featured,
        content: payload.content,
    }
}

fn list_body(posts: Vec<BlogPost>) -> ApiResponse<Vec<PostResponse>> {
    ApiResponse::list(posts.into_iter().map(to_response).collect())
}

/// Ids that are not UUIDs cannot name a stored post.
fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound("Post not found".to_string()))
}

/// GET /api/posts
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let filter = PostFilter {
        category: query.category.clone(),
        featured_only: query.featured_only(),
        limit: query.limit(),
        sort: query
            .sort
            .as_deref()
            .unwrap_or_default()
            .parse::<SortOrder>()
            .unwrap_or_default(),
    };

    let posts = state.posts.list(&filter).await?;
    Ok(HttpResponse::Ok().json(list_body(posts)))
}

/// GET /api/posts/search?q=
pub async fn search_posts(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let q = query.q.as_deref().unwrap_or_default();

    let posts = state.posts.search(q).await?;
    Ok(HttpResponse::Ok().json(list_body(posts)))
}

/// GET /api/posts/slug/{slug}
pub async fn get_post_by_slug(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_by_slug(&slug).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(post))))
}

/// GET /api/posts/category/{category}
pub async fn posts_by_category(
    state: web::Data<AppState>,
    category: web::Path<String>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.list_by_category(&category).await?;
    Ok(HttpResponse::Ok().json(list_body(posts)))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_by_id(parse_id(&id)?).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(post))))
}

/// POST /api/posts
pub async fn create_post(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(to_input(body.into_inner())).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(to_response(post))))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&id)?;
    let post = state.posts.update(id, to_input(body.into_inner())).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(post))))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.posts.delete(parse_id(&id)?).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::message("Post deleted successfully")))
}
