//! The Stickly application architecture diagram.
//!
//! Coordinates are canvas units on a 20 x 14 canvas with the origin at the
//! top-left corner. Rows of boxes share a top edge, height and font size and
//! are listed as `(x, width, label, fill)`.

use easel::{
    Scene, ValidationError,
    color::Color,
    draw::{
        AnnotationBlock, Arrow, FontSlant, FontWeight, Frame, HorizontalAlign, LabeledBox,
        LegendBuilder, Region, StrokeStyle, TextDefinition, VerticalAlign,
    },
    geometry::{Bounds, Point, Size},
};

const WIDTH: f32 = 20.0;
const HEIGHT: f32 = 14.0;
const CENTER_X: f32 = WIDTH / 2.0;

const COL_USER: &str = "#4A90E2";
const COL_FRONT: &str = "#E34F26";
const COL_BACK: &str = "#68A063";
const COL_WS: &str = "#FF6B6B";
const COL_DATA: &str = "#3498DB";
const COL_API: &str = "#5FA04E";
const COL_INK: &str = "#2C3E50";

/// Printed after the confirmation line.
pub const SUMMARY: &str =
    "Shows: Frontend-Backend communication, API endpoints, WebSocket events, and feature flows";

type BoxSpec = (f32, f32, &'static str, &'static str);

struct Row {
    top: f32,
    height: f32,
    font_size: f32,
    boxes: &'static [BoxSpec],
}

const FRONTEND: Row = Row {
    top: 4.4,
    height: 0.6,
    font_size: 8.0,
    boxes: &[
        (0.5, 2.3, "HTML/CSS\nUI", COL_FRONT),
        (3.0, 2.3, "JavaScript\nLogic", "#F7DF1E"),
        (5.5, 2.3, "LocalStorage\nState", "#9B59B6"),
        (8.0, 2.8, "Fetch API\nREST Client", COL_API),
        (11.0, 3.2, "Socket.io Client\nWebSocket", COL_WS),
        (14.5, 2.5, "Image Upload\nHandler", "#E67E22"),
        (17.2, 2.5, "Search/Filter\nUI Logic", "#3498DB"),
    ],
};

const SERVICES: Row = Row {
    top: 6.4,
    height: 0.8,
    font_size: 8.0,
    boxes: &[
        (0.5, 2.8, "Express.js\nRouter", COL_API),
        (3.5, 2.8, "Middleware\nAuth/Validate", "#F39C12"),
        (6.5, 3.2, "Socket.io Server\nWebSocket", COL_WS),
        (10.0, 3.0, "Business Logic\nControllers", COL_BACK),
        (13.2, 3.3, "Message Service\nComment/Like", "#2ECC71"),
        (16.7, 3.0, "Image Processing\nBase64", "#E67E22"),
    ],
};

const ENDPOINTS: Row = Row {
    top: 7.8,
    height: 0.6,
    font_size: 7.0,
    boxes: &[
        (0.5, 1.9, "POST\n/messages", "#27AE60"),
        (2.5, 1.9, "GET\n/messages", "#3498DB"),
        (4.5, 1.9, "PUT\n/messages/:id", "#F39C12"),
        (6.5, 1.9, "POST\n/:id/like", "#E74C3C"),
        (8.5, 1.9, "POST\n/:id/comments", "#9B59B6"),
        (10.5, 1.9, "POST\n/upload", "#E67E22"),
        (12.5, 1.9, "POST\n/:id/react", "#FF6B6B"),
        (14.5, 1.9, "DELETE\n/messages/:id", "#C0392B"),
        (16.5, 1.8, "POST\n/admin/login", "#34495E"),
        (18.5, 1.2, "/metrics", "#E6522C"),
    ],
};

const SOCKET_EVENTS: Row = Row {
    top: 8.5,
    height: 0.4,
    font_size: 7.0,
    boxes: &[
        (0.5, 2.8, "emit: newMessage", COL_WS),
        (3.5, 2.8, "emit: likesUpdated", COL_WS),
        (6.5, 2.8, "emit: newComment", COL_WS),
        (9.5, 2.8, "emit: messageUpdated", COL_WS),
        (12.5, 2.8, "emit: messageDeleted", COL_WS),
        (15.5, 2.3, "emit: activeUsers", COL_WS),
    ],
};

const STORAGE: Row = Row {
    top: 10.0,
    height: 0.8,
    font_size: 8.0,
    boxes: &[
        (1.0, 3.5, "messages: Array[]\nAll posted messages", COL_DATA),
        (4.8, 3.5, "adminSessions: Set\nActive admin sessions", "#34495E"),
        (8.6, 3.5, "imageData: Base64\nUploaded images", "#E67E22"),
        (12.4, 3.5, "comments: Nested[]\nComment threads", "#9B59B6"),
        (16.2, 3.5, "likes/reactions: Map\nEngagement data", "#E74C3C"),
    ],
};

/// A framed walkthrough in the bottom strip.
struct Flow {
    x: f32,
    title: &'static str,
    title_color: &'static str,
    fill: &'static str,
    edge: &'static str,
    steps: &'static str,
}

const FLOW_TOP: f32 = 12.1;

const FLOWS: [Flow; 4] = [
    Flow {
        x: 0.3,
        title: "1. POST MESSAGE FLOW",
        title_color: "#E65100",
        fill: "#FFF3E0",
        edge: "#FF9800",
        steps: "1. User fills form & clicks \"Post\"\n\
                2. Frontend validates (500 char limit)\n\
                3. Fetch: POST /api/messages + JSON\n\
                4. Backend creates message object\n\
                5. Save to messages[] array\n\
                6. Socket.emit('newMessage', data)\n\
                7. All clients receive & render\n\
                ✓ Message appears for everyone",
    },
    Flow {
        x: 5.2,
        title: "2. LIKE/REACTION FLOW",
        title_color: "#880E4F",
        fill: "#FCE4EC",
        edge: "#E91E63",
        steps: "1. User clicks like/emoji button\n\
                2. Check LocalStorage state\n\
                3. Fetch: POST /api/messages/:id/like\n\
                4. Backend updates like count\n\
                5. Socket.emit('likesUpdated')\n\
                6. All clients update counter\n\
                7. Button highlights (visual)\n\
                ✓ Real-time sync to all users",
    },
    Flow {
        x: 10.1,
        title: "3. COMMENT FLOW",
        title_color: "#1A237E",
        fill: "#E8EAF6",
        edge: "#3F51B5",
        steps: "1. User clicks comment button\n\
                2. GET /api/messages/:id/comments\n\
                3. Display comment section\n\
                4. User types & submits (200 char)\n\
                5. POST /api/messages/:id/comments\n\
                6. Backend saves to message.comments[]\n\
                7. Socket.emit('newComment')\n\
                ✓ Comment appears for all",
    },
    Flow {
        x: 15.0,
        title: "4. REAL-TIME UPDATES",
        title_color: "#B71C1C",
        fill: "#FFEBEE",
        edge: "#F44336",
        steps: "1. Client connects via WebSocket\n\
                2. Server tracks active connections\n\
                3. On data change (POST/PUT/DELETE)\n\
                4. Server emits event to all clients\n\
                5. Clients listen for events\n\
                6. Auto-update DOM without refresh\n\
                7. Bidirectional communication\n\
                ✓ Instant synchronization",
    },
];

/// `(start, end, label, color, style)`
type ArrowSpec = ((f32, f32), (f32, f32), &'static str, &'static str, StrokeStyle);

const CONNECTIONS: [ArrowSpec; 7] = [
    ((10.0, 3.0), (10.0, 3.4), "User Actions", COL_USER, StrokeStyle::Solid),
    ((9.2, 5.0), (9.5, 6.4), "HTTP REST", COL_API, StrokeStyle::Solid),
    ((10.5, 6.4), (10.8, 5.0), "JSON Response", COL_API, StrokeStyle::Dashed),
    ((12.0, 5.0), (7.5, 6.4), "Connect WebSocket", COL_WS, StrokeStyle::Solid),
    ((7.5, 6.4), (11.5, 5.0), "Real-time Events", COL_WS, StrokeStyle::Dashed),
    ((10.0, 7.2), (10.0, 10.0), "CRUD", COL_DATA, StrokeStyle::Solid),
    ((10.3, 10.0), (10.3, 7.2), "Read Data", COL_DATA, StrokeStyle::Dotted),
];

const KEY_POINTS: &str = "KEY POINTS:\n\
    • REST API for CRUD operations (Create, Read, Update, Delete)\n\
    • WebSocket (Socket.io) for real-time bidirectional communication\n\
    • LocalStorage for client-side state (theme, likes)\n\
    • In-memory storage means data is lost on server restart\n\
    • All connected clients receive updates instantly";

fn color(value: &str) -> Result<Color, ValidationError> {
    Color::new(value).map_err(ValidationError::InvalidColor)
}

/// A bold heading whose bottom edge sits at `y`.
fn heading(x: f32, y: f32, text: &str, size: f32, ink: &str) -> Result<AnnotationBlock, ValidationError> {
    Ok(AnnotationBlock::new(Point::new(x, y), text)
        .with_style(
            TextDefinition::new()
                .with_font_size(size)
                .with_weight(FontWeight::Bold)
                .with_color(color(ink)?),
        )
        .with_vertical_align(VerticalAlign::Bottom))
}

fn add_row(mut scene: Scene, row: &Row) -> Result<Scene, ValidationError> {
    for &(x, width, label, fill) in row.boxes {
        scene = scene.with(
            LabeledBox::new(
                Point::new(x, row.top),
                Size::new(width, row.height),
                label,
                color(fill)?,
            )
            .with_font_size(row.font_size),
        );
    }
    Ok(scene)
}

fn layer(top: f32, height: f32, fill: &str, caption: &str) -> Result<Region, ValidationError> {
    Ok(Region::new(Point::new(0.3, top), Size::new(19.4, height), color(fill)?, 0.1)
        .with_caption(caption))
}

/// Builds the Stickly architecture scene.
///
/// # Errors
///
/// Returns [`ValidationError`] only if one of the literal colors or the
/// legend is malformed.
pub fn stickly_architecture() -> Result<Scene, ValidationError> {
    let mut scene = Scene::new(Bounds::from_extents(0.0, WIDTH, 0.0, HEIGHT))
        .with_background(color("white")?)
        .with_description(SUMMARY);

    // Title block
    scene = scene
        .with(heading(CENTER_X, 0.5, "Stickly Application Architecture", 24.0, COL_INK)?)
        .with(
            AnnotationBlock::new(
                Point::new(CENTER_X, 1.2),
                "Frontend ↔ Backend Communication & Data Flow",
            )
            .with_style(
                TextDefinition::new()
                    .with_font_size(12.0)
                    .with_slant(FontSlant::Italic)
                    .with_color(color("#7F8C8D")?),
            )
            .with_vertical_align(VerticalAlign::Bottom),
        )
        .with(heading(CENTER_X, 1.8, "USER", 10.0, "black")?)
        .with(LabeledBox::new(
            Point::new(8.5, 2.2),
            Size::new(3.0, 0.8),
            "Users\n(Browser/Mobile)",
            color(COL_USER)?,
        ));

    scene = scene.with(layer(3.4, 1.8, COL_FRONT, "FRONTEND (Client-Side JavaScript)")?);
    scene = add_row(scene, &FRONTEND)?;

    scene = scene.with(layer(5.7, 3.3, COL_BACK, "BACKEND (Node.js + Express.js)")?);
    scene = add_row(scene, &SERVICES)?;
    scene = add_row(scene, &ENDPOINTS)?;
    scene = add_row(scene, &SOCKET_EVENTS)?;

    scene = scene.with(layer(9.5, 1.5, COL_DATA, "DATA LAYER (In-Memory Storage)")?);
    scene = add_row(scene, &STORAGE)?;

    scene = scene.with(heading(CENTER_X, 11.4, "KEY FEATURE FLOWS (User Journey)", 11.0, COL_INK)?);
    for flow in &FLOWS {
        let text_x = flow.x + 0.2;
        scene = scene
            .with(
                heading(text_x, FLOW_TOP - 0.25, flow.title, 9.0, flow.title_color)?
                    .with_align(HorizontalAlign::Left),
            )
            .with(
                AnnotationBlock::new(Point::new(text_x, FLOW_TOP), flow.steps)
                    .with_style(
                        TextDefinition::new()
                            .with_font_family("monospace")
                            .with_font_size(7.0),
                    )
                    .with_align(HorizontalAlign::Left)
                    .with_vertical_align(VerticalAlign::Top)
                    .with_frame(
                        Frame::new(color(flow.fill)?, color(flow.edge)?)
                            .with_alpha(0.7)
                            .with_padding(0.15)
                            .with_corner_radius(0.08),
                    ),
            );
    }

    for ((x1, y1), (x2, y2), label, ink, style) in CONNECTIONS {
        scene = scene.with(
            Arrow::new(Point::new(x1, y1), Point::new(x2, y2), color(ink)?)
                .with_label(label)
                .with_style(style),
        );
    }

    let legend = LegendBuilder::new(Point::new(0.2, 0.2), 3)
        .title("Components")
        .entry(color(COL_FRONT)?, "Frontend (Client)")
        .entry(color(COL_BACK)?, "Backend (Server)")
        .entry(color(COL_API)?, "REST API")
        .entry(color(COL_WS)?, "WebSocket (Real-time)")
        .entry(color(COL_DATA)?, "Data Storage")
        .build()?;
    scene = scene.with(legend);

    scene = scene.with(
        AnnotationBlock::new(Point::new(WIDTH - 0.3, HEIGHT - 0.5), KEY_POINTS)
            .with_style(
                TextDefinition::new()
                    .with_font_family("monospace")
                    .with_font_size(7.0)
                    .with_color(color("#5D4037")?),
            )
            .with_align(HorizontalAlign::Right)
            .with_vertical_align(VerticalAlign::Bottom)
            .with_frame(Frame::new(color("#FFF9E6")?, color("#F39C12")?)),
    );

    Ok(scene)
}
