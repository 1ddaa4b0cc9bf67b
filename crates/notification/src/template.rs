//! Fixed HTML bodies for every [`Notification`](crate::Notification) kind.
//!
//! Caller supplied values are interpolated verbatim; no escaping or
//! validation happens here.

/// Product identity shown in subjects, headings and footers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Branding {
    pub product_name: String,

    pub copyright_year: i32,
}

pub(crate) fn welcome_subject(branding: &Branding) -> String {
    format!("Welcome to {} 🎉", branding.product_name)
}

pub(crate) fn welcome_body(branding: &Branding, username: &str, login_url: &str) -> String {
    let Branding { product_name, copyright_year } = branding;

    format!(
        r#"
<div style="font-family: Arial, sans-serif; max-width: 600px; margin: auto;">
  <h2 style="color:#4f46e5;">Welcome to {product_name}, {username} 🎉</h2>
  <p>We're thrilled to have you on board! Start exploring your courses now:</p>
  <a href="{login_url}" style="background-color:#4f46e5;color:white;padding:10px 20px;
     text-decoration:none;border-radius:6px;">Login to {product_name}</a>
  <p style="font-size:14px;">If the button doesn't work, copy this link:</p>
  <p>{login_url}</p>
  <hr/>
  <p style="font-size:12px;color:#999;">© {copyright_year} {product_name}</p>
</div>
"#
    )
}

pub(crate) fn login_otp_subject(branding: &Branding) -> String {
    format!("Your {} Login OTP", branding.product_name)
}

pub(crate) fn login_otp_body(branding: &Branding, username: &str, otp: &str) -> String {
    let Branding { product_name, copyright_year } = branding;

    format!(
        r#"
<div style="font-family: Arial, sans-serif; max-width: 600px; margin: auto; padding: 20px;">
  <div style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
              padding: 30px; border-radius: 10px; text-align: center;">
    <h2 style="color: white; margin: 0;">Your Login OTP</h2>
  </div>

  <div style="background: #f7fafc; padding: 30px; border-radius: 10px; margin-top: 20px;">
    <p style="font-size: 16px; color: #2d3748;">Hi {username},</p>
    <p style="font-size: 14px; color: #4a5568;">
      Use the following One-Time Password (OTP) to log in to your {product_name} account:
    </p>

    <div style="background: white; border: 2px dashed #667eea; border-radius: 8px;
                padding: 20px; margin: 30px 0; text-align: center;">
      <p style="font-size: 12px; color: #718096; margin: 0 0 10px 0;">YOUR OTP CODE</p>
      <h1 style="color: #667eea; font-size: 36px; letter-spacing: 8px; margin: 0;
                 font-family: 'Courier New', monospace;">{otp}</h1>
    </div>

    <div style="background: #fff3cd; border-left: 4px solid #ffc107; padding: 15px;
                border-radius: 4px; margin: 20px 0;">
      <p style="margin: 0; font-size: 14px; color: #856404;">
        ⚠️ <strong>Important:</strong> This OTP is valid for <strong>5 minutes</strong> only.
      </p>
    </div>

    <p style="font-size: 13px; color: #718096; margin-top: 20px;">
      If you didn't request this OTP, please ignore this email or contact support if you have concerns.
    </p>
  </div>

  <hr style="border: none; border-top: 1px solid #e2e8f0; margin: 30px 0;"/>

  <div style="text-align: center;">
    <p style="font-size: 12px; color: #a0aec0; margin: 5px 0;">
      © {copyright_year} {product_name}. All rights reserved.
    </p>
    <p style="font-size: 11px; color: #cbd5e0;">
      This is an automated message, please do not reply to this email.
    </p>
  </div>
</div>
"#
    )
}

pub(crate) fn password_reset_subject(branding: &Branding) -> String {
    format!("Reset your {} password", branding.product_name)
}

pub(crate) fn password_reset_body(branding: &Branding, username: &str, reset_url: &str) -> String {
    let Branding { product_name, copyright_year } = branding;

    format!(
        r#"
<div style="font-family: Arial, sans-serif; max-width: 600px; margin: auto;">
  <h2 style="color:#4f46e5;">Password Reset Request</h2>
  <p>Hi {username},</p>
  <p>We received a request to reset your password. Click the button below to continue:</p>
  <a href="{reset_url}" style="background-color:#4f46e5;color:white;
     padding:10px 20px;text-decoration:none;border-radius:6px;">Reset Password</a>
  <p style="font-size:14px;">If you didn't request this, you can safely ignore this email.</p>
  <p style="font-size:14px;">Or copy and paste this link into your browser:</p>
  <p>{reset_url}</p>
  <hr/>
  <p style="font-size:12px;color:#999;">© {copyright_year} {product_name}</p>
</div>
"#
    )
}
