// SPDX-License-Identifier: Apache-2.0

//! Operation table for the demo API (users, posts, comments, products,
//! orders, messages).

use super::{CatalogOperation, OperationKind, Param, ParamKind};

/// All catalog operations, grouped by resource.
pub static OPERATIONS: &[CatalogOperation] = &[
    // Users
    CatalogOperation {
        name: "users",
        summary: "List all users",
        kind: OperationKind::Query,
        document: "query {
  users {
    id
    username
    email
    password
    role
    salary
    ssn
    isActive
    createdAt
  }
}",
        params: &[],
        confirm: false,
    },
    CatalogOperation {
        name: "user",
        summary: "Fetch one user by ID",
        kind: OperationKind::Query,
        document: "query GetUser($id: Int!) {
  user(id: $id) {
    id
    username
    email
    password
    role
    salary
    ssn
    isActive
    createdAt
  }
}",
        params: &[Param::required("id", ParamKind::Int)],
        confirm: false,
    },
    CatalogOperation {
        name: "search-users",
        summary: "Search users by text",
        kind: OperationKind::Query,
        document: "query SearchUsers($query: String!) {
  searchUsers(query: $query) {
    id
    username
    email
    password
    role
    salary
    ssn
  }
}",
        params: &[Param::required("query", ParamKind::String)],
        confirm: false,
    },
    CatalogOperation {
        name: "create-user",
        summary: "Create a user",
        kind: OperationKind::Mutation,
        document: "mutation CreateUser($username: String!, $email: String!, $password: String!, $role: String) {
  createUser(username: $username, email: $email, password: $password, role: $role) {
    success
    message
    id
  }
}",
        params: &[
            Param::required("username", ParamKind::String),
            Param::required("email", ParamKind::String),
            Param::required("password", ParamKind::String),
            Param::with_default("role", ParamKind::String, "user"),
        ],
        confirm: false,
    },
    CatalogOperation {
        name: "update-user",
        summary: "Rename a user or change their role",
        kind: OperationKind::Mutation,
        document: "mutation UpdateUser($id: Int!, $username: String, $role: String) {
  updateUser(id: $id, username: $username, role: $role) {
    success
    message
  }
}",
        params: &[
            Param::required("id", ParamKind::Int),
            Param::optional("username", ParamKind::String),
            Param::optional("role", ParamKind::String),
        ],
        confirm: false,
    },
    CatalogOperation {
        name: "delete-user",
        summary: "Delete a user",
        kind: OperationKind::Mutation,
        document: "mutation DeleteUser($id: Int!) {
  deleteUser(id: $id) {
    success
    message
  }
}",
        params: &[Param::required("id", ParamKind::Int)],
        confirm: true,
    },
    // Posts
    CatalogOperation {
        name: "posts",
        summary: "List all posts",
        kind: OperationKind::Query,
        document: "query {
  posts {
    id
    title
    content
    authorId
    isPublished
    isPrivate
    createdAt
  }
}",
        params: &[],
        confirm: false,
    },
    CatalogOperation {
        name: "post",
        summary: "Fetch one post by ID",
        kind: OperationKind::Query,
        document: "query GetPost($id: Int!) {
  post(id: $id) {
    id
    title
    content
    authorId
    isPublished
    isPrivate
    createdAt
  }
}",
        params: &[Param::required("id", ParamKind::Int)],
        confirm: false,
    },
    CatalogOperation {
        name: "posts-by-author",
        summary: "List posts written by one user",
        kind: OperationKind::Query,
        document: "query GetPostsByAuthor($authorId: Int!) {
  posts(authorId: $authorId) {
    id
    title
    content
    authorId
    isPublished
    isPrivate
    createdAt
  }
}",
        params: &[Param::required("authorId", ParamKind::Int)],
        confirm: false,
    },
    CatalogOperation {
        name: "create-post",
        summary: "Create a post",
        kind: OperationKind::Mutation,
        document: "mutation CreatePost($title: String!, $content: String!, $authorId: Int!, $isPublished: Boolean!, $isPrivate: Boolean!) {
  createPost(title: $title, content: $content, authorId: $authorId, isPublished: $isPublished, isPrivate: $isPrivate) {
    success
    message
    id
  }
}",
        params: &[
            Param::required("title", ParamKind::String),
            Param::required("content", ParamKind::String),
            Param::required("authorId", ParamKind::Int),
            Param::optional("isPublished", ParamKind::Bool),
            Param::optional("isPrivate", ParamKind::Bool),
        ],
        confirm: false,
    },
    CatalogOperation {
        name: "update-post",
        summary: "Retitle or (un)publish a post",
        kind: OperationKind::Mutation,
        document: "mutation UpdatePost($id: Int!, $title: String, $isPublished: Boolean) {
  updatePost(id: $id, title: $title, isPublished: $isPublished) {
    success
    message
  }
}",
        params: &[
            Param::required("id", ParamKind::Int),
            Param::optional("title", ParamKind::String),
            Param::optional("isPublished", ParamKind::Bool),
        ],
        confirm: false,
    },
    // Comments
    CatalogOperation {
        name: "comments",
        summary: "List comments on a post",
        kind: OperationKind::Query,
        document: "query GetComments($postId: Int!) {
  comments(postId: $postId) {
    id
    content
    postId
    authorId
    createdAt
  }
}",
        params: &[Param::required("postId", ParamKind::Int)],
        confirm: false,
    },
    CatalogOperation {
        name: "create-comment",
        summary: "Comment on a post",
        kind: OperationKind::Mutation,
        document: "mutation CreateComment($content: String!, $postId: Int!, $authorId: Int!) {
  createComment(content: $content, postId: $postId, authorId: $authorId) {
    success
    message
    id
  }
}",
        params: &[
            Param::required("content", ParamKind::String),
            Param::required("postId", ParamKind::Int),
            Param::required("authorId", ParamKind::Int),
        ],
        confirm: false,
    },
    // Products
    CatalogOperation {
        name: "products",
        summary: "List all products",
        kind: OperationKind::Query,
        document: "query {
  products {
    id
    name
    description
    price
    stock
    isAvailable
    createdAt
  }
}",
        params: &[],
        confirm: false,
    },
    CatalogOperation {
        name: "product",
        summary: "Fetch one product by ID",
        kind: OperationKind::Query,
        document: "query GetProduct($id: Int!) {
  product(id: $id) {
    id
    name
    description
    price
    stock
    isAvailable
    createdAt
  }
}",
        params: &[Param::required("id", ParamKind::Int)],
        confirm: false,
    },
    // Orders
    CatalogOperation {
        name: "orders",
        summary: "List all orders",
        kind: OperationKind::Query,
        document: "query {
  orders {
    id
    userId
    productId
    quantity
    totalPrice
    status
    createdAt
  }
}",
        params: &[],
        confirm: false,
    },
    CatalogOperation {
        name: "user-orders",
        summary: "List orders placed by one user",
        kind: OperationKind::Query,
        document: "query GetUserOrders($userId: Int!) {
  orders(userId: $userId) {
    id
    userId
    productId
    quantity
    totalPrice
    status
    createdAt
  }
}",
        params: &[Param::required("userId", ParamKind::Int)],
        confirm: false,
    },
    CatalogOperation {
        name: "order",
        summary: "Fetch one order by ID",
        kind: OperationKind::Query,
        document: "query GetOrder($id: Int!) {
  order(id: $id) {
    id
    userId
    productId
    quantity
    totalPrice
    status
    createdAt
  }
}",
        params: &[Param::required("id", ParamKind::Int)],
        confirm: false,
    },
    CatalogOperation {
        name: "create-order",
        summary: "Place an order",
        kind: OperationKind::Mutation,
        document: "mutation CreateOrder($userId: Int!, $productId: Int!, $quantity: Int!) {
  createOrder(userId: $userId, productId: $productId, quantity: $quantity) {
    success
    message
    id
  }
}",
        params: &[
            Param::required("userId", ParamKind::Int),
            Param::required("productId", ParamKind::Int),
            Param::required("quantity", ParamKind::Int),
        ],
        confirm: false,
    },
    CatalogOperation {
        name: "update-order-status",
        summary: "Change an order's status",
        kind: OperationKind::Mutation,
        document: "mutation UpdateOrderStatus($id: Int!, $status: String!) {
  updateOrderStatus(id: $id, status: $status) {
    success
    message
  }
}",
        params: &[Param::required("id", ParamKind::Int), Param::required("status", ParamKind::String)],
        confirm: false,
    },
    // Messages
    CatalogOperation {
        name: "messages",
        summary: "List a user's messages",
        kind: OperationKind::Query,
        document: "query GetMessages($userId: Int!) {
  messages(userId: $userId) {
    id
    fromUserId
    toUserId
    content
    isRead
    createdAt
  }
}",
        params: &[Param::required("userId", ParamKind::Int)],
        confirm: false,
    },
    CatalogOperation {
        name: "send-message",
        summary: "Send a message between users",
        kind: OperationKind::Mutation,
        document: "mutation SendMessage($fromUserId: Int!, $toUserId: Int!, $content: String!) {
  sendMessage(fromUserId: $fromUserId, toUserId: $toUserId, content: $content) {
    success
    message
    id
  }
}",
        params: &[
            Param::required("fromUserId", ParamKind::Int),
            Param::required("toUserId", ParamKind::Int),
            Param::required("content", ParamKind::String),
        ],
        confirm: false,
    },
    CatalogOperation {
        name: "mark-message-read",
        summary: "Mark a message as read",
        kind: OperationKind::Mutation,
        document: "mutation MarkMessageRead($id: Int!) {
  markMessageRead(id: $id) {
    success
    message
  }
}",
        params: &[Param::required("id", ParamKind::Int)],
        confirm: false,
    },
];
