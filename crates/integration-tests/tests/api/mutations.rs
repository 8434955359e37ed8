use blog_engine::{Store, User};
use indoc::indoc;
use integration_tests::{runtime, TestApi};

#[test]
fn create_user() {
    let response = runtime().block_on(async {
        TestApi::default()
            .execute(indoc! {r#"
                mutation {
                  createUser(name: "Nina", email: "nina@ex.com", age: 33) {
                    id
                    name
                    email
                    age
                  }
                }
            "#})
            .await
    });

    insta::assert_json_snapshot!(response, {".data.createUser.id" => "[id]"}, @r###"
    {
      "data": {
        "createUser": {
          "id": "[id]",
          "name": "Nina",
          "email": "nina@ex.com",
          "age": 33
        }
      }
    }
    "###);
}

#[test]
fn create_user_with_taken_email() {
    let api = TestApi::default();

    let response = runtime().block_on(async {
        api.execute(indoc! {r#"
            mutation {
              createUser(name: "Imposter", email: "bharath@ex.com") {
                id
              }
            }
        "#})
        .await
    });

    insta::assert_json_snapshot!(response, @r###"
    {
      "data": null,
      "errors": [
        {
          "message": "email `bharath@ex.com` is already taken",
          "locations": [
            {
              "line": 2,
              "column": 3
            }
          ],
          "path": [
            "createUser"
          ],
          "extensions": {
            "code": "CONFLICT"
          }
        }
      ]
    }
    "###);

    // The failed create left no trace.
    let users = runtime().block_on(async {
        api.execute(indoc! {r#"
            query {
              users {
                email
              }
            }
        "#})
        .await
    });

    insta::assert_json_snapshot!(users, @r###"
    {
      "data": {
        "users": [
          {
            "email": "bharath@ex.com"
          },
          {
            "email": "sara@gmail.com"
          },
          {
            "email": "mike@gmail.com"
          }
        ]
      }
    }
    "###);
}

#[test]
fn delete_user_cascades() {
    let api = TestApi::default();

    let response = runtime().block_on(async {
        api.execute(indoc! {r#"
            mutation {
              deleteUser(id: "1") {
                id
                name
              }
            }
        "#})
        .await
    });

    insta::assert_json_snapshot!(response, @r###"
    {
      "data": {
        "deleteUser": {
          "id": "1",
          "name": "Bharath"
        }
      }
    }
    "###);

    // Both of the user's posts disappear, and with them every comment on
    // them as well as the user's comment on the remaining post.
    let leftovers = runtime().block_on(async {
        api.execute(indoc! {r#"
            query {
              users {
                id
              }
              posts {
                id
              }
              comments {
                id
              }
            }
        "#})
        .await
    });

    insta::assert_json_snapshot!(leftovers, @r###"
    {
      "data": {
        "users": [
          {
            "id": "2"
          },
          {
            "id": "3"
          }
        ],
        "posts": [
          {
            "id": "13"
          }
        ],
        "comments": []
      }
    }
    "###);
}

#[test]
fn delete_unknown_user() {
    let response = runtime().block_on(async {
        TestApi::default()
            .execute(indoc! {r#"
                mutation {
                  deleteUser(id: "999") {
                    id
                  }
                }
            "#})
            .await
    });

    insta::assert_json_snapshot!(response, @r###"
    {
      "data": null,
      "errors": [
        {
          "message": "user `999` not found",
          "locations": [
            {
              "line": 2,
              "column": 3
            }
          ],
          "path": [
            "deleteUser"
          ],
          "extensions": {
            "code": "NOT_FOUND"
          }
        }
      ]
    }
    "###);
}

#[test]
fn create_post() {
    let response = runtime().block_on(async {
        TestApi::default()
            .execute(indoc! {r#"
                mutation {
                  createPost(title: "T", body: "B", published: true, author: "1") {
                    id
                    title
                    published
                    author {
                      id
                      name
                    }
                  }
                }
            "#})
            .await
    });

    insta::assert_json_snapshot!(response, {".data.createPost.id" => "[id]"}, @r###"
    {
      "data": {
        "createPost": {
          "id": "[id]",
          "title": "T",
          "published": true,
          "author": {
            "id": "1",
            "name": "Bharath"
          }
        }
      }
    }
    "###);
}

#[test]
fn create_post_with_unknown_author() {
    let response = runtime().block_on(async {
        TestApi::default()
            .execute(indoc! {r#"
                mutation {
                  createPost(title: "T", body: "B", published: true, author: "999") {
                    id
                  }
                }
            "#})
            .await
    });

    insta::assert_json_snapshot!(response, @r###"
    {
      "data": null,
      "errors": [
        {
          "message": "user `999` not found",
          "locations": [
            {
              "line": 2,
              "column": 3
            }
          ],
          "path": [
            "createPost"
          ],
          "extensions": {
            "code": "NOT_FOUND"
          }
        }
      ]
    }
    "###);
}

#[test]
fn delete_post_cascades() {
    let api = TestApi::default();

    let response = runtime().block_on(async {
        api.execute(indoc! {r#"
            mutation {
              deletePost(id: "11") {
                id
                title
              }
            }
        "#})
        .await
    });

    insta::assert_json_snapshot!(response, @r###"
    {
      "data": {
        "deletePost": {
          "id": "11",
          "title": "First Post"
        }
      }
    }
    "###);

    let leftovers = runtime().block_on(async {
        api.execute(indoc! {r#"
            query {
              posts {
                id
              }
              comments {
                id
              }
            }
        "#})
        .await
    });

    insta::assert_json_snapshot!(leftovers, @r###"
    {
      "data": {
        "posts": [
          {
            "id": "12"
          },
          {
            "id": "13"
          }
        ],
        "comments": [
          {
            "id": "C3"
          },
          {
            "id": "C4"
          }
        ]
      }
    }
    "###);
}

#[test]
fn create_comment() {
    let response = runtime().block_on(async {
        TestApi::default()
            .execute(indoc! {r#"
                mutation {
                  createComment(text: "resonates", author: "2", post: "11") {
                    id
                    text
                    author {
                      name
                    }
                    post {
                      title
                    }
                  }
                }
            "#})
            .await
    });

    insta::assert_json_snapshot!(response, {".data.createComment.id" => "[id]"}, @r###"
    {
      "data": {
        "createComment": {
          "id": "[id]",
          "text": "resonates",
          "author": {
            "name": "Sara"
          },
          "post": {
            "title": "First Post"
          }
        }
      }
    }
    "###);
}

// Post 13 exists but is not published, so it cannot be commented on.
#[test]
fn create_comment_on_unpublished_post() {
    let response = runtime().block_on(async {
        TestApi::default()
            .execute(indoc! {r#"
                mutation {
                  createComment(text: "hello", author: "1", post: "13") {
                    id
                  }
                }
            "#})
            .await
    });

    insta::assert_json_snapshot!(response, @r###"
    {
      "data": null,
      "errors": [
        {
          "message": "post `13` not found",
          "locations": [
            {
              "line": 2,
              "column": 3
            }
          ],
          "path": [
            "createComment"
          ],
          "extensions": {
            "code": "NOT_FOUND"
          }
        }
      ]
    }
    "###);
}

#[test]
fn create_comment_with_unknown_author() {
    let response = runtime().block_on(async {
        TestApi::default()
            .execute(indoc! {r#"
                mutation {
                  createComment(text: "hello", author: "999", post: "11") {
                    id
                  }
                }
            "#})
            .await
    });

    insta::assert_json_snapshot!(response, @r###"
    {
      "data": null,
      "errors": [
        {
          "message": "user `999` not found",
          "locations": [
            {
              "line": 2,
              "column": 3
            }
          ],
          "path": [
            "createComment"
          ],
          "extensions": {
            "code": "NOT_FOUND"
          }
        }
      ]
    }
    "###);
}

#[test]
fn delete_comment() {
    let api = TestApi::default();

    let response = runtime().block_on(async {
        api.execute(indoc! {r#"
            mutation {
              deleteComment(id: "C1") {
                id
                text
              }
            }
        "#})
        .await
    });

    insta::assert_json_snapshot!(response, @r###"
    {
      "data": {
        "deleteComment": {
          "id": "C1",
          "text": "nice post there"
        }
      }
    }
    "###);

    let leftovers = runtime().block_on(async {
        api.execute(indoc! {r#"
            query {
              comments {
                id
              }
            }
        "#})
        .await
    });

    insta::assert_json_snapshot!(leftovers, @r###"
    {
      "data": {
        "comments": [
          {
            "id": "C2"
          },
          {
            "id": "C3"
          },
          {
            "id": "C4"
          }
        ]
      }
    }
    "###);
}

#[test]
fn delete_unknown_comment() {
    let response = runtime().block_on(async {
        TestApi::default()
            .execute(indoc! {r#"
                mutation {
                  deleteComment(id: "C999") {
                    id
                  }
                }
            "#})
            .await
    });

    insta::assert_json_snapshot!(response, @r###"
    {
      "data": null,
      "errors": [
        {
          "message": "comment `C999` not found",
          "locations": [
            {
              "line": 2,
              "column": 3
            }
          ],
          "path": [
            "deleteComment"
          ],
          "extensions": {
            "code": "NOT_FOUND"
          }
        }
      ]
    }
    "###);
}

#[test]
fn post_lifecycle_with_a_single_author() {
    runtime().block_on(async {
        let mut store = Store::new();
        store.users.push(User {
            id: "1".into(),
            name: "Bharath".into(),
            email: "bharath@ex.com".into(),
            age: Some(24),
        });
        let api = TestApi::new(store);

        let response = api
            .execute(indoc! {r#"
                mutation {
                  createPost(title: "T", body: "B", published: true, author: "1") {
                    id
                    author {
                      id
                    }
                  }
                }
            "#})
            .await;

        assert_eq!(response["data"]["createPost"]["author"]["id"], "1");
        let post_id = response["data"]["createPost"]["id"].as_str().unwrap().to_string();

        const CREATE_COMMENT: &str = indoc! {r#"
            mutation CreateComment($post: ID!) {
              createComment(text: "nice", author: "2", post: $post) {
                id
              }
            }
        "#};

        // No user "2" yet, so commenting fails.
        let failed = api
            .execute_with(CREATE_COMMENT, serde_json::json!({ "post": post_id }))
            .await;
        assert_eq!(failed["errors"][0]["extensions"]["code"], "NOT_FOUND");

        api.store().write().await.users.push(User {
            id: "2".into(),
            name: "Sara".into(),
            email: "sara@gmail.com".into(),
            age: None,
        });

        let succeeded = api
            .execute_with(CREATE_COMMENT, serde_json::json!({ "post": post_id }))
            .await;
        assert!(succeeded["errors"].is_null());
        assert!(!succeeded["data"]["createComment"]["id"].as_str().unwrap().is_empty());

        // Removing the author takes the post and its comment with it.
        let deleted = api
            .execute(indoc! {r#"
                mutation {
                  deleteUser(id: "1") {
                    name
                  }
                }
            "#})
            .await;
        assert_eq!(deleted["data"]["deleteUser"]["name"], "Bharath");

        let store = api.store().read().await;
        assert!(store.posts.is_empty());
        assert!(store.comments.is_empty());
        assert_eq!(store.users.len(), 1);
    });
}
