/// One part of a hand-built `multipart/form-data` body.
pub enum MultipartPart<'a> {
    Text(&'a str, &'a str),
    File {
        field: &'a str,
        filename: &'a str,
        content: &'a [u8],
    },
}

pub fn multipart_body(parts: &[MultipartPart<'_>]) -> (String, Vec<u8>) {
    let boundary = "----BoundaryTest".to_string();
    let mut body = Vec::new();
    for part in parts {
        body.extend(format!("--{}\r\n", boundary).as_bytes());
        match part {
            MultipartPart::Text(name, value) => {
                body.extend(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                        name, value
                    )
                    .as_bytes(),
                );
            }
            MultipartPart::File {
                field,
                filename,
                content,
            } => {
                body.extend(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                        field, filename
                    )
                    .as_bytes(),
                );
                body.extend(*content);
                body.extend(b"\r\n");
            }
        }
    }
    body.extend(format!("--{}--\r\n", boundary).as_bytes());
    (boundary, body)
}
