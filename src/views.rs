//! Server-side HTML rendering for the management pages

use std::fmt::Write;

use crate::models::{book::Book, client::Client, loan::LoanDetails};

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<nav>
<a href="/">Home</a> |
<a href="/manage_clients">Clients</a> |
<a href="/manage_books">Books</a> |
<a href="/manage_loans">Loans</a>
</nav>
<h1>{title}</h1>
{body}
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

pub fn index_page() -> String {
    layout(
        "Library Management",
        "<p>Manage the library's clients, books and loans from the links above.</p>",
    )
}

pub fn clients_page(clients: &[Client]) -> String {
    let mut body = String::from(
        "<table>\n<tr><th>Id</th><th>Name</th><th>Email</th><th></th></tr>\n",
    );
    for client in clients {
        let _ = write!(
            body,
            "<tr><td>{id}</td>\
             <td>{name}</td>\
             <td>{email}</td>\
             <td>\
             <form method=\"post\" action=\"/clients/{id}/update\">\
             <input name=\"name\" value=\"{name}\">\
             <input name=\"email\" value=\"{email}\">\
             <button type=\"submit\">Update</button>\
             </form>\
             <form method=\"post\" action=\"/clients/{id}/delete\">\
             <button type=\"submit\">Delete</button>\
             </form>\
             </td></tr>\n",
            id = client.id,
            name = escape(&client.name),
            email = escape(&client.email),
        );
    }
    body.push_str("</table>\n");
    body.push_str(
        "<h2>New client</h2>\n\
         <form method=\"post\" action=\"/clients\">\
         <input name=\"name\" placeholder=\"Name\">\
         <input name=\"email\" placeholder=\"Email\">\
         <button type=\"submit\">Create</button>\
         </form>\n",
    );
    layout("Manage Clients", &body)
}

pub fn books_page(books: &[Book]) -> String {
    let mut body = String::from(
        "<table>\n<tr><th>Id</th><th>Title</th><th>Author</th><th></th></tr>\n",
    );
    for book in books {
        let _ = write!(
            body,
            "<tr><td>{id}</td>\
             <td>{title}</td>\
             <td>{author}</td>\
             <td>\
             <form method=\"post\" action=\"/books/{id}/update\">\
             <input name=\"title\" value=\"{title}\">\
             <input name=\"author\" value=\"{author}\">\
             <button type=\"submit\">Update</button>\
             </form>\
             <form method=\"post\" action=\"/books/{id}/delete\">\
             <button type=\"submit\">Delete</button>\
             </form>\
             </td></tr>\n",
            id = book.id,
            title = escape(&book.title),
            author = escape(&book.author),
        );
    }
    body.push_str("</table>\n");
    body.push_str(
        "<h2>New book</h2>\n\
         <form method=\"post\" action=\"/books\">\
         <input name=\"title\" placeholder=\"Title\">\
         <input name=\"author\" placeholder=\"Author\">\
         <button type=\"submit\">Create</button>\
         </form>\n",
    );
    layout("Manage Books", &body)
}

pub fn loans_page(loans: &[LoanDetails]) -> String {
    let mut body = String::from(
        "<table>\n<tr><th>Id</th><th>Client</th><th>Book</th>\
         <th>Loan date</th><th>Return date</th><th></th></tr>\n",
    );
    for loan in loans {
        let return_date = loan.return_date.as_deref().unwrap_or("");
        let _ = write!(
            body,
            "<tr><td>{id}</td>\
             <td>{client_name}</td>\
             <td>{book_title}</td>\
             <td>{loan_date}</td>\
             <td>{return_date}</td>\
             <td>\
             <form method=\"post\" action=\"/loans/{id}/update\">\
             <input name=\"client_id\" value=\"{client_id}\">\
             <input name=\"book_id\" value=\"{book_id}\">\
             <input name=\"loan_date\" value=\"{loan_date}\">\
             <input name=\"return_date\" value=\"{return_date}\">\
             <button type=\"submit\">Update</button>\
             </form>\
             <form method=\"post\" action=\"/loans/{id}/delete\">\
             <button type=\"submit\">Delete</button>\
             </form>\
             </td></tr>\n",
            id = loan.id,
            client_id = loan.client_id,
            book_id = loan.book_id,
            client_name = escape(&loan.client_name),
            book_title = escape(&loan.book_title),
            loan_date = escape(&loan.loan_date),
            return_date = escape(return_date),
        );
    }
    body.push_str("</table>\n");
    body.push_str(
        "<h2>New loan</h2>\n\
         <form method=\"post\" action=\"/loans\">\
         <input name=\"client_id\" placeholder=\"Client id\">\
         <input name=\"book_id\" placeholder=\"Book id\">\
         <input name=\"loan_date\" placeholder=\"Loan date\">\
         <button type=\"submit\">Create</button>\
         </form>\n",
    );
    layout("Manage Loans", &body)
}
