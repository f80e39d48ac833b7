// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! English catalog data.
//!
//! Keys mirror the Arabic catalog one-to-one; `catalog::parity_report`
//! flags any divergence at load time.

pub(super) const MESSAGES: &[(&str, &str)] = &[
	// Navigation
	("nav.home", "Home"),
	("nav.about", "About Us"),
	("nav.howItWorks", "How It Works"),
	("nav.watchVideo", "Watch Video"),
	("nav.technologies", "Technologies"),
	("nav.contact", "Contact Us"),
	("nav.dashboard", "Dashboard"),
	("nav.cases", "Cases"),
	("nav.login", "Login"),
	("nav.logout", "Logout"),
	("nav.profile", "Profile"),
	("nav.settings", "Settings"),
	// Homepage
	("home.title", "Modaqqeq"),
	("home.subtitle", "AI-Powered Fraud Detection System"),
	(
		"home.description",
		"Advanced artificial intelligence technology to detect financial fraud and employment manipulation for the Ministry of Human Resources and Social Development.",
	),
	("home.getStarted", "Get Started"),
	("home.learnMore", "Learn More"),
	("home.watchDemo", "Watch Demo"),
	("home.features.title", "Advanced Fraud Detection Features"),
	(
		"home.features.subtitle",
		"Comprehensive AI-powered tools designed specifically for government fraud detection and prevention",
	),
	("home.stats.title", "Proven Results & Impact"),
	(
		"home.stats.subtitle",
		"Modaqqeq has demonstrated significant improvements in fraud detection efficiency and accuracy",
	),
	// About
	("about.title", "About Modaqqeq System"),
	(
		"about.subtitle",
		"Leading the future of fraud detection with artificial intelligence",
	),
	(
		"about.description",
		"Modaqqeq is an advanced AI-powered fraud detection system developed specifically for the Ministry of Human Resources and Social Development to combat financial fraud and employment manipulation.",
	),
	("about.mission.title", "Our Mission"),
	(
		"about.mission.description",
		"To protect public resources and ensure transparency in government services through cutting-edge AI technology.",
	),
	("about.vision.title", "Our Vision"),
	(
		"about.vision.description",
		"To be the leading fraud detection system in the region, supporting Saudi Arabia's Vision 2030.",
	),
	("about.systemFeatures", "System Features"),
	(
		"about.systemFeaturesDesc",
		"An integrated system that combines the latest technologies and specialized expertise",
	),
	("about.provenStats", "Proven Statistics"),
	(
		"about.provenStatsDesc",
		"Numbers that confirm the system's effectiveness in detecting and preventing fraud",
	),
	// How It Works
	("howItWorks.title", "How Modaqqeq Works"),
	("howItWorks.subtitle", "Advanced AI technology in simple steps"),
	("howItWorks.step1.title", "Data Collection"),
	(
		"howItWorks.step1.description",
		"Collect and analyze documents and financial data from multiple sources",
	),
	("howItWorks.step2.title", "AI Analysis"),
	(
		"howItWorks.step2.description",
		"Advanced machine learning algorithms detect patterns and anomalies",
	),
	("howItWorks.step3.title", "Risk Assessment"),
	(
		"howItWorks.step3.description",
		"Generate comprehensive risk scores and fraud probability assessments",
	),
	("howItWorks.step4.title", "Action & Reporting"),
	(
		"howItWorks.step4.description",
		"Provide actionable insights and detailed reports for decision makers",
	),
	// Technologies
	("technologies.title", "Advanced Technologies"),
	(
		"technologies.subtitle",
		"Cutting-edge AI and machine learning technologies",
	),
	("technologies.ai.title", "Artificial Intelligence"),
	(
		"technologies.ai.description",
		"Deep learning algorithms for pattern recognition and anomaly detection",
	),
	("technologies.ml.title", "Machine Learning"),
	(
		"technologies.ml.description",
		"Supervised and unsupervised learning models for fraud detection",
	),
	("technologies.nlp.title", "Natural Language Processing"),
	(
		"technologies.nlp.description",
		"Text analysis and document verification capabilities",
	),
	("technologies.blockchain.title", "Blockchain Security"),
	(
		"technologies.blockchain.description",
		"Immutable audit trails and secure data verification",
	),
	// Contact
	("contact.title", "Contact Us"),
	("contact.subtitle", "Get in touch with our team"),
	(
		"contact.address",
		"Ministry of Human Resources and Social Development, Riyadh, Saudi Arabia",
	),
	("contact.phone", "+966 11 123 4567"),
	("contact.email", "info@mhrsd.gov.sa"),
	("contact.form.name", "Full Name"),
	("contact.form.email", "Email Address"),
	("contact.form.subject", "Subject"),
	("contact.form.message", "Message"),
	("contact.form.send", "Send Message"),
	// Video
	("video.title", "Watch Modaqqeq in Action"),
	(
		"video.subtitle",
		"See how our AI system detects fraud in real-time",
	),
	("video.duration", "Duration: 3:45"),
	// Login
	("login.title", "Sign In to Modaqqeq"),
	("login.subtitle", "Access the fraud detection dashboard"),
	("login.email", "Email Address"),
	("login.password", "Password"),
	("login.rememberMe", "Remember me"),
	("login.forgotPassword", "Forgot password?"),
	("login.signIn", "Sign In"),
	("login.showPassword", "Show password"),
	("login.hidePassword", "Hide password"),
	("login.demo.title", "Demo Credentials"),
	("login.demo.email", "Email: admin@mhrsd.gov.sa"),
	("login.demo.password", "Password: admin123"),
	// Dashboard
	("dashboard.title", "Fraud Detection Dashboard"),
	(
		"dashboard.subtitle",
		"Monitor and analyze fraud detection activities in real-time",
	),
	("dashboard.overview", "Overview"),
	("dashboard.totalCases", "Total Cases"),
	("dashboard.activeCases", "Active Cases"),
	("dashboard.resolvedCases", "Resolved Cases"),
	("dashboard.riskScore", "Average Risk Score"),
	("dashboard.recentCases", "Recent Cases"),
	("dashboard.uploadCase", "Upload New Case"),
	("dashboard.viewAll", "View All Cases"),
	("dashboard.quickActions", "Quick Actions"),
	("dashboard.systemStatus", "System Status"),
	(
		"dashboard.recentCasesDesc",
		"Latest fraud detection cases and their analysis results",
	),
	("dashboard.analysisEngine", "Analysis Engine"),
	("dashboard.activeUsers", "Active Users"),
	("dashboard.processingQueue", "Processing Queue"),
	("dashboard.database", "Database"),
	("dashboard.online", "Online"),
	("dashboard.healthy", "Healthy"),
	("dashboard.cases", "cases"),
	("dashboard.performanceMetrics", "Performance Metrics"),
	("dashboard.detectionAccuracy", "Detection Accuracy"),
	("dashboard.processingSpeed", "Processing Speed"),
	("dashboard.systemUsage", "System Usage"),
	("dashboard.fromLastMonth", "from last month"),
	("dashboard.viewAnalytics", "View Analytics"),
	("dashboard.generateReport", "Generate Report"),
	// Cases
	("cases.upload", "Upload Case"),
	("cases.analyze", "Analyze with AI"),
	("cases.riskLevel", "Risk Level"),
	("cases.status", "Status"),
	("cases.date", "Date"),
	("cases.id", "Case ID"),
	("cases.title", "Case Title"),
	("cases.category", "Category"),
	("cases.priority", "Priority"),
	("cases.description", "Description"),
	("cases.documents", "Documents"),
	("cases.timeline", "Timeline"),
	("cases.findings", "Key Findings"),
	("cases.recommendations", "Recommendations"),
	("cases.high", "High Risk"),
	("cases.medium", "Medium Risk"),
	("cases.low", "Low Risk"),
	("cases.pending", "Pending"),
	("cases.completed", "Completed"),
	("cases.underReview", "Under Review"),
	("cases.escalated", "Escalated"),
	("cases.closed", "Closed"),
	("cases.management", "Cases Management"),
	("cases.managementDesc", "View and manage all fraud detection cases"),
	("cases.searchFilter", "Search & Filter"),
	("cases.searchPlaceholder", "Search cases..."),
	("cases.allStatuses", "All Statuses"),
	("cases.allRiskLevels", "All Risk Levels"),
	("cases.highRisk", "High Risk"),
	("cases.mediumRisk", "Medium Risk"),
	("cases.lowRisk", "Low Risk"),
	("cases.advancedFilter", "Advanced Filter"),
	("cases.casesList", "Cases List"),
	("cases.showing", "Showing"),
	("cases.of", "of"),
	("cases.assignedTo", "Assigned To"),
	("cases.actions", "Actions"),
	("cases.view", "View"),
	// Common
	("common.loading", "Loading..."),
	("common.error", "Error"),
	("common.success", "Success"),
	("common.warning", "Warning"),
	("common.info", "Information"),
	("common.cancel", "Cancel"),
	("common.save", "Save"),
	("common.delete", "Delete"),
	("common.edit", "Edit"),
	("common.view", "View"),
	("common.search", "Search"),
	("common.filter", "Filter"),
	("common.export", "Export"),
	("common.import", "Import"),
	("common.download", "Download"),
	("common.upload", "Upload"),
	("common.refresh", "Refresh"),
	("common.back", "Back"),
	("common.next", "Next"),
	("common.previous", "Previous"),
	("common.close", "Close"),
	("common.confirm", "Confirm"),
	("common.yes", "Yes"),
	("common.no", "No"),
	// Errors
	("error.general", "An unexpected error occurred"),
	("error.network", "Network connection error"),
	("error.unauthorized", "Unauthorized access"),
	("error.notFound", "Page not found"),
	("error.validation", "Please check your input"),
	("error.upload", "File upload failed"),
	("error.analysis", "Analysis failed"),
	("error.invalidLocale", "Unsupported language code"),
	// Success Messages
	("success.login", "Successfully logged in"),
	("success.logout", "Successfully logged out"),
	("success.upload", "File uploaded successfully"),
	("success.analysis", "Analysis completed successfully"),
	("success.save", "Data saved successfully"),
	("success.message.sent", "Message sent successfully"),
	// Stats Section
	("stats.detectionAccuracy", "Detection Accuracy"),
	(
		"stats.detectionAccuracyDesc",
		"Accuracy rate of fraud detection and suspicious activities",
	),
	("stats.processingSpeed", "Processing Speed"),
	(
		"stats.processingSpeedDesc",
		"Reduction in case processing and analysis time",
	),
	("stats.monitoring", "Monitoring"),
	(
		"stats.monitoringDesc",
		"Continuous monitoring around the clock throughout the week",
	),
	("stats.analyzedCases", "Analyzed Cases"),
	(
		"stats.analyzedCasesDesc",
		"Total fraud cases successfully processed",
	),
	// Features Section
	("features.advancedDetection", "Advanced Fraud Detection"),
	(
		"features.advancedDetectionDesc",
		"Sophisticated algorithms that analyze patterns and detect fraudulent activities with high accuracy and low error rates",
	),
	("features.governmentSecurity", "Government Security"),
	(
		"features.governmentSecurityDesc",
		"Enterprise-level security measures ensuring data protection and regulatory compliance",
	),
	("features.instantProcessing", "Instant Processing"),
	(
		"features.instantProcessingDesc",
		"Real-time analysis and quick alerts enabling rapid response to potential fraud cases",
	),
	("features.bilingualSupport", "Bilingual Support"),
	(
		"features.bilingualSupportDesc",
		"Full support for Arabic and English languages for a seamless and integrated user experience",
	),
	("features.multiUserAccess", "Multi-User Access"),
	(
		"features.multiUserAccessDesc",
		"Role-based access control system for different departments and user levels",
	),
	("features.advancedAnalytics", "Advanced Analytics"),
	(
		"features.advancedAnalyticsDesc",
		"Comprehensive reports and in-depth analytics for informed decision-making based on data",
	),
	("features.smartDataManagement", "Smart Data Management"),
	(
		"features.smartDataManagementDesc",
		"Advanced system for managing and organizing big data with advanced search and filtering capabilities",
	),
	("features.encryptionProtection", "Encryption & Protection"),
	(
		"features.encryptionProtectionDesc",
		"Advanced encryption for sensitive data with multi-layered security protocols",
	),
	// Hero Section
	(
		"hero.ministryBadge",
		"Ministry of Human Resources and Social Development",
	),
	("hero.advancedAnalysis", "Advanced AI Analysis"),
	(
		"hero.advancedAnalysisDesc",
		"Sophisticated algorithms that detect fraud patterns with exceptional accuracy",
	),
	("hero.continuousMonitoring", "24/7 Continuous Monitoring"),
	(
		"hero.continuousMonitoringDesc",
		"Comprehensive monitoring system for financial transactions and suspicious activities",
	),
	("hero.advancedSecurity", "Advanced Security & Protection"),
	(
		"hero.advancedSecurityDesc",
		"Highest government security standards and regulatory compliance",
	),
	// Footer
	(
		"footer.description",
		"An advanced system for detecting financial fraud and employment manipulation, enhancing financial transparency and organizational efficiency at the Ministry of Human Resources and Social Development",
	),
	("footer.quickLinks", "Quick Links"),
	("footer.contactInfo", "Contact Information"),
	(
		"footer.developedWith",
		"Developed with the highest quality and security standards for the government sector",
	),
	("footer.availableLanguages", "Available in Arabic and English"),
	(
		"footer.allRightsReserved",
		"© 2024 Ministry of Human Resources and Social Development. All rights reserved.",
	),
	// Analysis results
	(
		"analysis.finding.1",
		"Suspicious transaction patterns detected in financial records",
	),
	(
		"analysis.finding.2",
		"Document inconsistencies found in employment verification",
	),
	(
		"analysis.finding.3",
		"Identity verification anomalies in submitted documentation",
	),
	(
		"analysis.finding.4",
		"Unusual employment history patterns identified",
	),
	(
		"analysis.recommendation.1",
		"Immediate manual review by compliance team required",
	),
	(
		"analysis.recommendation.2",
		"Contact verification with previous employers needed",
	),
	(
		"analysis.recommendation.3",
		"Additional documentation and proof of identity requested",
	),
	(
		"analysis.recommendation.4",
		"Flag case for priority investigation",
	),
];
